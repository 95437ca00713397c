//! CLI entry point for sizetree

use std::process;

use clap::Parser;
use log::debug;
use sizetree::cli::{Args, normalize_legacy_args, should_use_color};
use sizetree::{
    OutputConfig, SortPolicy, TreeBuilder, TreeError, TreeFormatter, print_json, sort_tree,
    write_html,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = match Args::try_parse_from(normalize_legacy_args(std::env::args_os())) {
        Ok(args) => args,
        // --help and --version are not errors
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("sizetree: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), TreeError> {
    let policy = SortPolicy::new(args.sort, args.reverse);

    let mut builder = TreeBuilder::new();
    let mut root = builder.build(&args.path)?;
    let (dirs, files) = root.counts();
    debug!(
        "built tree for {}: {} directories, {} files, {} entries skipped",
        root.path.display(),
        dirs,
        files,
        builder.skipped()
    );

    sort_tree(&mut root, policy);

    if let Some(ref html_path) = args.html {
        write_html(&root, &args.path.display().to_string(), policy, html_path)?;
        println!("HTML output saved to: {}", html_path.display());
        return Ok(());
    }

    let stdout_err = |source| TreeError::Output {
        path: "<stdout>".into(),
        source,
    };
    if args.json {
        print_json(&root).map_err(stdout_err)
    } else {
        let config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        TreeFormatter::new(config).print(&root).map_err(stdout_err)
    }
}
