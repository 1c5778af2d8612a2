use clap::{Parser, Subcommand, ValueEnum};
use reqwest::Method;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "swapi-cli")]
#[command(about = "Command line client for the Star Wars favorites API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    People,
    Planets,
}

impl Kind {
    fn segment(self) -> &'static str {
        match self {
            Kind::People => "people",
            Kind::Planets => "planets",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every route the API answers
    Routes,
    /// List people or planets
    List { kind: Kind },
    /// Show one person or planet
    Show { kind: Kind, id: i64 },
    /// Create a person or planet with the given name
    Create { kind: Kind, name: String },
    /// List users
    Users,
    /// Create a user
    AddUser { email: String },
    /// Show a user's favorites
    Favorites { user_id: i64 },
    /// Add a person or planet to a user's favorites
    Favorite { user_id: i64, kind: Kind, id: i64 },
    /// Remove a person or planet from a user's favorites
    Unfavorite { user_id: i64, kind: Kind, id: i64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let (method, path, body) = match cli.command {
        Commands::Routes => (Method::GET, "/".to_string(), None),
        Commands::List { kind } => (Method::GET, format!("/{}", kind.segment()), None),
        Commands::Show { kind, id } => (Method::GET, format!("/{}/{}", kind.segment(), id), None),
        Commands::Create { kind, name } => (
            Method::POST,
            format!("/{}", kind.segment()),
            Some(json!({ "name": name })),
        ),
        Commands::Users => (Method::GET, "/users".to_string(), None),
        Commands::AddUser { email } => (
            Method::POST,
            "/users".to_string(),
            Some(json!({ "email": email })),
        ),
        Commands::Favorites { user_id } => {
            (Method::GET, format!("/users/{}/favorites", user_id), None)
        }
        Commands::Favorite { user_id, kind, id } => (
            Method::POST,
            format!("/users/{}/favorites/{}/{}", user_id, kind.segment(), id),
            None,
        ),
        Commands::Unfavorite { user_id, kind, id } => (
            Method::DELETE,
            format!("/users/{}/favorites/{}/{}", user_id, kind.segment(), id),
            None,
        ),
    };

    let mut request = client.request(method, format!("{}{}", base, path));
    if let Some(body) = body {
        request = request.json(&body);
    }

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
