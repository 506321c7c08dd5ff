use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::net::SocketAddr;
use std::path::PathBuf;

use structopt::StructOpt;
use tracing::{info, info_span, warn};
use tracing_futures::Instrument;

use geocoord_core::batch::{parse_batch, read_lines, write_csv};
use geocoord_core::parse_coordinates;
use geocoord_web::{app, init_logging};

#[derive(StructOpt)]
struct CliArgs {
    #[structopt(long = "log-level", case_insensitive = true, default_value = "INFO")]
    log_level: tracing::Level,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Serve the coordinate parsing HTTP API
    Serve {
        #[structopt(long, env = "GEOCOORD_BIND", default_value = "127.0.0.1:3001")]
        bind: SocketAddr,
    },
    /// Ask for a coordinate until one parses
    Prompt,
    /// Parse one coordinate per line and print a CSV report
    Batch {
        /// Input file, stdin when omitted
        #[structopt(parse(from_os_str))]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let args = CliArgs::from_args();
    init_logging(args.log_level);

    match args.cmd {
        Command::Serve { bind } => serve(bind).await,
        Command::Prompt => prompt(),
        Command::Batch { input } => batch(input),
    }
}

async fn serve(bind: SocketAddr) {
    info!("Listening on {}", bind);
    axum::Server::bind(&bind)
        .serve(app().into_make_service())
        .instrument(info_span!("geocoord-web", %bind))
        .await
        .expect("server error");
}

fn prompt() {
    loop {
        match promptly::prompt::<String, _>("Coordinates (latitude,longitude)") {
            Ok(line) => match parse_coordinates(&line) {
                Some(parsed) => {
                    println!(
                        "{} ({} / {})",
                        parsed, parsed.latitude_format, parsed.longitude_format
                    );
                    return;
                }
                None => warn!("Could not parse {:?}, please re-enter", line),
            },
            Err(err) => {
                info!("Prompt closed: {}", err);
                return;
            }
        }
    }
}

fn batch(input: Option<PathBuf>) {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            info!("file {path:?}");
            Box::new(BufReader::new(
                File::open(path).expect("cannot open input file"),
            ))
        }
        None => Box::new(io::stdin().lock()),
    };
    let inputs = read_lines(reader).expect("cannot read input");
    let results = parse_batch(&inputs);
    write_csv(io::stdout(), &inputs, &results).expect("cannot write csv");
}
