/*
Run with:
    cargo run --example usage

Set RUST_LOG=trace to watch the classifier rules fire.
*/

use hebphonics_rs::parse_words;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let text = "בְּרֵאשִׁית בָּרָא אֱלֹהִים אֵת הַשָּׁמַיִם וְאֵת הָאָרֶץ";

    for parsed in parse_words(text) {
        println!("{}", parsed.word);
        println!("  symbols:   {}", parsed.symbol_names().join(" "));
        for (i, syllable) in parsed.syllable_slices().iter().enumerate() {
            let kind = if parsed.syllables[i].open { "open" } else { "closed" };
            let names: Vec<_> = syllable.iter().map(|s| s.name()).collect();
            println!("  syllable:  [{}] ({kind})", names.join(" "));
        }
        if !parsed.flags.is_empty() {
            println!("  flags:     {}", parsed.flags.names().join(", "));
        }
        println!("  json:      {}", serde_json::to_string(&parsed)?);
    }

    Ok(())
}
