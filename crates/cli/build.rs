use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("wikireader")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read wiki articles, headlines and trivia from the terminal")
        .arg(clap::arg!([ARTICLE] ... "Title of the article to read (a random article if omitted), or its URL"))
        .arg(clap::arg!(-n --news "Display the latest headlines"))
        .arg(clap::arg!(-d --didyouknow "Display some interesting facts"))
        .arg(clap::arg!(-t --today "Display noteworthy events that occurred on this date"))
        .arg(clap::arg!(-s --search "Look the article up with the wiki's search instead of by exact title"))
        .arg(clap::arg!(-i --images "List the article's image sources instead of its text"))
        .arg(
            clap::arg!(-m --mode <MODE> "Output mode; remembered for later runs")
                .value_parser(["terse", "summary", "full", "random"]),
        )
        .arg(clap::arg!(-u --url <URL> "Wiki URL to read from (e.g. http://en.wikipedia.org/wiki/)"))
        .arg(clap::arg!(-l --language <LANG> "Wikipedia language (e.g. sv)"))
        .arg(
            clap::arg!(--config <FILE> "Settings file (default: ~/.wikireader)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "wikireader", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "wikireader", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "wikireader", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "wikireader", &completions_dir).unwrap();
}
