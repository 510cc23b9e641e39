pub fn run() {
    let langs = quasiql_langs::all();
    println!("Supported host languages ({}):", langs.len());
    for lang in langs {
        println!("  {} (.{})", lang.name(), lang.extensions().join(", ."));
    }
}
