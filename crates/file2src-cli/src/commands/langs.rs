pub fn run() {
    let langs = file2src_langs::all();
    println!("Supported languages ({}):", langs.len());
    for lang in langs {
        println!(
            "  {:<6} {:<16} aliases: {}",
            lang.name(),
            lang.default_type(),
            lang.aliases().join(", ")
        );
    }
}
