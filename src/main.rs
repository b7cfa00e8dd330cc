use clap::{Parser, Subcommand};
use mavera_hall::diagnostics::{StderrSink, StdoutSink};
use mavera_hall::types::PageId;
use mavera_hall::{generate, output, pages, tokens};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mavera-hall")]
#[command(about = "Static site generator for the Mavera Hall venue")]
#[command(long_about = "\
Static site generator for the Mavera Hall venue

Pages: about, faqs, gallery, hall-details. Every render prints one
diagnostic line (to stderr for 'render', whose stdout is JSON):

  <source-id> <timestamp> <message>

Styling comes from design tokens. Defaults are built in; put a theme.toml
in the config directory to override any of them:

  [colors]
  primary = \"#1E4034\"

Run 'mavera-hall gen-config' to print a documented theme.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing theme.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page and write the HTML site
    Build,
    /// Render one page and print its content tree as JSON
    Render {
        /// Page slug or source id (about, faqs, gallery, hall-details)
        page: PageId,
    },
    /// Print a single design token value
    Token {
        /// color, font, spacing or maxWidth
        category: String,
        name: String,
    },
    /// List all design tokens
    Tokens,
    /// Print the CSS custom properties generated from the tokens
    Css,
    /// Print a stock theme.toml with all tokens documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let theme = tokens::load_tokens(&cli.config)?;
            println!("==> Generating site → {}", cli.output.display());
            let generated = generate::generate(&cli.output, &theme, &StdoutSink)?;
            output::print_generate_output(&generated);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Render { page } => {
            let content = pages::render(page, &StderrSink);
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
        Command::Token { category, name } => {
            let theme = tokens::load_tokens(&cli.config)?;
            println!("{}", theme.get_token(&category, &name)?);
        }
        Command::Tokens => {
            let theme = tokens::load_tokens(&cli.config)?;
            output::print_token_list(&theme);
        }
        Command::Css => {
            let theme = tokens::load_tokens(&cli.config)?;
            println!("{}", tokens::generate_token_css(&theme));
        }
        Command::GenConfig => {
            print!("{}", tokens::stock_config_toml());
        }
    }

    Ok(())
}
