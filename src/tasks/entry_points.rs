/* ************************************************************************ **
** This file is part of gauss-trace, and is licensed under EITHER the MIT   **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::cmd::{self, DisplayArgs, SolveArgs};
use crate::ui::cli_deserialize::CliDeserialize;
use crate::ui::logging::GlobalLogger;

use clap::{App, Arg, ArgMatches};
use std::ffi::OsStr;
use std::path::PathBuf;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.causes() {
            error!("{}", cause);
        }

        if ::std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        ::std::process::exit(1);
    });
}

impl CliDeserialize for SolveArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("input")
                .value_name("INPUT")
                .required(true)
                .help("yaml or json file with 'matrix', 'vector', and optionally 'method'"),
            Arg::with_name("method")
                .short("m").long("method")
                .value_name("METHOD")
                .possible_values(&["gauss", "gauss-jordan", "both"])
                .help("elimination method; overrides the input file [default: gauss]"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self>
    { Ok(SolveArgs {
        input: PathBuf::from(expect_value_of(m, "input")?),
        method: match m.value_of("method") {
            Some(s) => Some(s.parse()?),
            None => None,
        },
    })}
}

impl CliDeserialize for DisplayArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("output")
                .short("o").long("output")
                .value_name("FILE")
                .help("also write the full result (with all steps) as json"),
            Arg::with_name("heatmap")
                .long("heatmap")
                .help("color matrix cells by relative magnitude"),
            Arg::with_name("no_color")
                .long("no-color")
                .help("disable ANSI colors in the trace and the log"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self>
    { Ok(DisplayArgs {
        output: m.value_of_os("output").map(PathBuf::from),
        heatmap: m.is_present("heatmap"),
        color: !m.is_present("no_color"),
    })}
}

fn expect_value_of<'a>(m: &'a ArgMatches<'_>, name: &str) -> FailResult<&'a str> {
    m.value_of(name).ok_or_else(|| format_err!("missing required argument '{}'", name))
}

// -------------------------------------------------------------------------------------

#[allow(unknown_lints, dangerous_implicit_autorefs)]
pub fn gauss_trace() {
    wrap_result_main(|| {
        let (app, de) = <(SolveArgs, DisplayArgs)>::augment_clap_app({
            App::new("gauss-trace")
                .version(crate_version!())
                .author(crate_authors!(", "))
                .about("Solve a small linear system by elimination and show every step.")
                .args(&[
                    Arg::with_name("log")
                        .long("log")
                        .value_name("FILE")
                        .help("also write the log to this file"),
                    Arg::with_name("verbose")
                        .short("v").long("verbose")
                        .help("trace every recorded step in the log"),
                ])
        });
        let matches = app.get_matches();
        let (solve_args, display_args) = de.resolve_args(&matches)?;

        let mut logger = GlobalLogger::default();
        logger
            .verbosity(matches.occurrences_of("verbose") as i32)
            .plain(!display_args.color);
        if let Some(path) = matches.value_of_os("log") {
            logger.path(path);
        }
        logger.apply()?;

        cmd::run(&solve_args, &display_args)
    });
}
