use std::process::exit;

use anyhow::Result;

use notebook_convert::cli::{
    check_for_stdout_stream, get_config_path, get_log_file, get_matches, get_mode, get_target,
    get_verbosity,
};
use notebook_convert::logging::init_logger;
use notebook_convert::workflow::{run, RunOptions};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("Error: {e:#}");
        exit(1);
    }
}

fn try_main() -> Result<()> {
    let matches = get_matches()?;

    let verbosity = get_verbosity(&matches);
    let log_file = get_log_file(&matches)?;
    init_logger(verbosity, &log_file)?;

    let options = RunOptions {
        target: get_target(&matches)?,
        mode: get_mode(&matches)?,
        dry_run: matches.get_flag("dry"),
        config_path: get_config_path(&matches)?,
    };

    run(options)?;

    check_for_stdout_stream();

    Ok(())
}
