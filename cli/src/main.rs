use std::process::ExitCode;

use clap::{Parser, Subcommand};
use students_cli::{render, App, Status, StudentForm};
use students_core::{config, Students, StudentsClient, UreqTransport, DEFAULT_BASE_URL};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "students")]
#[command(about = "Create, read, update and delete students")]
struct Cli {
    /// Students resource URL
    #[arg(long, global = true, env = config::BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load all students
    List,

    /// Load one student by id
    Get {
        id: String,
    },

    /// Create a student
    Create {
        #[arg(long, default_value = "")]
        name: String,

        /// Defaults to 0 when omitted
        #[arg(long, default_value = "")]
        age: String,

        #[arg(long, default_value = "")]
        email: String,
    },

    /// Replace a student's fields
    Update {
        id: String,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        age: String,

        #[arg(long, default_value = "")]
        email: String,
    },

    /// Delete a student by id
    Delete {
        id: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    let cli = Cli::parse();
    tracing::debug!(base_url = %cli.base_url, "using students resource");

    let api = Students::new(StudentsClient::new(&cli.base_url), UreqTransport::new());
    let mut app = App::new(api);

    match cli.command {
        Commands::List => app.load_all(),
        Commands::Get { id } => app.get_by_id(&id),
        Commands::Create { name, age, email } => app.create(&StudentForm {
            id: String::new(),
            name,
            age,
            email,
        }),
        Commands::Update {
            id,
            name,
            age,
            email,
        } => app.update(&StudentForm {
            id,
            name,
            age,
            email,
        }),
        Commands::Delete { id } => app.delete(&id),
    }

    let view = app.view();
    if let Some(line) = render::status_line(&view.status) {
        eprintln!("{line}");
    }
    if let Status::Error(_) = view.status {
        return Ok(ExitCode::FAILURE);
    }
    print!("{}", render::view(view));
    Ok(ExitCode::SUCCESS)
}
