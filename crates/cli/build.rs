use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("arxiv-digest")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Search arXiv over a date range and save the results as a report")
        .arg(clap::arg!(-q --query <TEXT> "Search query").default_value("Artificial Intelligence"))
        .arg(clap::arg!(--"from-date" <DATE> "First submission date to include (YYYY-MM-DD)").value_name("YYYY-MM-DD"))
        .arg(clap::arg!(--"to-date" <DATE> "Last submission date to include (YYYY-MM-DD)").value_name("YYYY-MM-DD"))
        .arg(
            clap::arg!(-d --"target-dir" <DIR> "Existing directory to save the report in")
                .value_name("DIR")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-i --input <FILE> "Read a saved results page from FILE, or '-' for stdin")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Report format (markdown, json)")
                .value_name("FORMAT")
                .default_value("markdown")
                .value_parser(["markdown", "json"]),
        )
        .arg(
            clap::arg!(--"page-size" <NUM> "Results per page")
                .default_value("200")
                .value_parser(["25", "50", "100", "200"]),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--"escape-pipes" "Escape '|' inside table cells (Markdown only)"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "arxiv-digest", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "arxiv-digest", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "arxiv-digest", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "arxiv-digest", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
