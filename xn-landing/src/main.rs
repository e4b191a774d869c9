use anyhow::{Context, Result};
use clap::{crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use std::fs;
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;
use xn_landing::{name, toc, Config, Page};

fn app() -> App<'static, 'static> {
    App::new("xn-landing")
        .version(crate_version!())
        .about("Personalize the landing page of an internationalized domain name")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("JSON configuration overriding the built-in defaults")
                .takes_value(true)
                .global(true),
        )
        .subcommand(
            SubCommand::with_name("page")
                .about("Print the page model for a URL as JSON")
                .arg(Arg::with_name("url").required(true).help("URL the page is served from"))
                .arg(
                    Arg::with_name("user-agent")
                        .long("user-agent")
                        .value_name("UA")
                        .takes_value(true)
                        .help("Browser user agent, used to detect mobile devices"),
                )
                .arg(Arg::with_name("pretty").long("pretty").help("Pretty-print the JSON")),
        )
        .subcommand(
            SubCommand::with_name("decode")
                .about("Decode punycode labels, with or without the xn-- prefix")
                .arg(Arg::with_name("label").required(true).multiple(true)),
        )
        .subcommand(
            SubCommand::with_name("toc")
                .about("Render the table of contents of a markdown document")
                .arg(Arg::with_name("file").help("Markdown file, stdin when omitted")),
        )
}

fn load_config(matches: &ArgMatches<'_>) -> Result<Config> {
    match matches.value_of("config") {
        Some(path) => {
            Config::from_path(path).with_context(|| format!("cannot load config {}", path))
        }
        None => Ok(Config::default()),
    }
}

fn page(matches: &ArgMatches<'_>, config: &Config) -> Result<()> {
    let url = matches.value_of("url").unwrap_or_default();
    let page = Page::for_url(url, matches.value_of("user-agent"), config);
    let json = if matches.is_present("pretty") {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };
    println!("{}", json);
    Ok(())
}

fn decode(matches: &ArgMatches<'_>) -> Result<()> {
    for label in matches.values_of("label").into_iter().flatten() {
        println!("{}", name::decode_label(label)?);
    }
    Ok(())
}

fn table_of_contents(matches: &ArgMatches<'_>) -> Result<()> {
    let source = match matches.value_of("file") {
        Some(path) => fs::read_to_string(path).with_context(|| format!("cannot read {}", path))?,
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("cannot read stdin")?;
            source
        }
    };
    println!("{}", toc::render(&toc::Heading::parse_markdown(&source)));
    Ok(())
}

fn run(matches: &ArgMatches<'_>) -> Result<()> {
    match matches.subcommand() {
        ("page", Some(sub)) => page(sub, &load_config(sub)?),
        ("decode", Some(sub)) => decode(sub),
        ("toc", Some(sub)) => table_of_contents(sub),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = app().get_matches();
    if let Err(error) = run(&matches) {
        eprintln!("error: {:#}", error);
        process::exit(1);
    }
}
