use gemini_client::{GeminiModel, GeminiOptions, GenerativeModel};
use std::{
    io::{self, Write},
    path::Path,
    process::ExitCode,
    sync::Arc,
};
use strategist::{
    config,
    controller::{Controller, GeneratedContent},
    prompt::{ContentOptions, ContentType, GenerationRequest, NewsletterSection, TechnicalLevel},
    session::SessionContext,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = match config::api_key() {
        Ok(key) => key,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let model: Arc<dyn GenerativeModel> = Arc::new(GeminiModel::new(
        config::model_config(),
        GeminiOptions {
            api_key,
            ..Default::default()
        },
    ));

    match run(model).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(model: Arc<dyn GenerativeModel>) -> io::Result<()> {
    println!("AI Content Strategy Generator");
    println!("Generate professional blog posts and newsletters about AI and web technology.");
    println!();
    print_usage();

    let mut session = SessionContext::new();
    let mut controller = Controller::new(model);

    loop {
        println!();
        let Some(content_type) = select_content_type()? else {
            break;
        };

        let Some(topic) = read_line("Enter your topic: ")? else {
            break;
        };

        let options = match content_type {
            ContentType::BlogPost => {
                let Some(level) = select_technical_level()? else {
                    break;
                };
                let Some(include_code) = confirm("Include Code Examples?", true)? else {
                    break;
                };
                ContentOptions::BlogPost {
                    level,
                    include_code,
                }
            }
            ContentType::Newsletter => {
                let Some(sections) = select_sections()? else {
                    break;
                };
                ContentOptions::Newsletter { sections }
            }
        };

        let request = match GenerationRequest::new(topic, options) {
            Ok(request) => request,
            Err(warning) => {
                println!("{warning}");
                continue;
            }
        };

        println!("Generating content...");
        match controller.generate(&mut session, &request).await {
            Ok(content) => {
                println!();
                println!("### Generated Content:");
                println!();
                println!("{}", content.body);
                println!();
                if offer_download(&content)?.is_none() {
                    break;
                }
            }
            Err(error) => println!("{error}"),
        }
    }

    Ok(())
}

fn print_usage() {
    println!("How to use:");
    println!("  1. Choose content type (Blog Post/Newsletter)");
    println!("  2. Enter your topic");
    println!("  3. Adjust additional settings");
    println!("  4. Generate and review the content");
    println!("  5. Save the generated markdown");
    println!("Type 'exit' at the content type prompt to quit.");
}

fn select_content_type() -> io::Result<Option<ContentType>> {
    loop {
        println!("Choose Content Type");
        for (index, content_type) in ContentType::ALL.iter().enumerate() {
            println!("  {}) {}", index + 1, content_type.label());
        }
        let Some(choice) = read_line("> ")? else {
            return Ok(None);
        };
        if choice.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }
        if let Some(content_type) = pick(&ContentType::ALL, &choice) {
            return Ok(Some(content_type));
        }
        println!("Enter 1 or 2, or 'exit' to quit.");
    }
}

fn select_technical_level() -> io::Result<Option<TechnicalLevel>> {
    loop {
        println!("Technical Level");
        for (index, level) in TechnicalLevel::ALL.iter().enumerate() {
            println!("  {}) {}", index + 1, level.label());
        }
        let Some(choice) = read_line("> [2] ")? else {
            return Ok(None);
        };
        if choice.is_empty() {
            return Ok(Some(TechnicalLevel::default()));
        }
        if let Some(level) = pick(&TechnicalLevel::ALL, &choice) {
            return Ok(Some(level));
        }
        println!("Enter a number between 1 and 3.");
    }
}

fn select_sections() -> io::Result<Option<Vec<NewsletterSection>>> {
    loop {
        println!("Newsletter Sections to Include");
        for (index, section) in NewsletterSection::ALL.iter().enumerate() {
            println!("  {}) {}", index + 1, section.label());
        }
        println!("Comma-separated numbers, blank for the default, 'none' for no sections.");
        let Some(choice) = read_line("> [1,2] ")? else {
            return Ok(None);
        };
        if choice.is_empty() {
            return Ok(Some(NewsletterSection::DEFAULT.to_vec()));
        }
        if choice.eq_ignore_ascii_case("none") {
            return Ok(Some(Vec::new()));
        }
        if let Some(sections) = parse_sections(&choice) {
            return Ok(Some(sections));
        }
        println!("Enter numbers between 1 and 4, separated by commas.");
    }
}

fn parse_sections(choice: &str) -> Option<Vec<NewsletterSection>> {
    let mut sections = Vec::new();
    for token in choice.split(',') {
        let section = pick(&NewsletterSection::ALL, token.trim())?;
        if !sections.contains(&section) {
            sections.push(section);
        }
    }
    Some(sections)
}

fn confirm(question: &str, default: bool) -> io::Result<Option<bool>> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        let Some(choice) = read_line(&format!("{question} {hint} "))? else {
            return Ok(None);
        };
        match choice.to_ascii_lowercase().as_str() {
            "" => return Ok(Some(default)),
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => println!("Enter y or n."),
        }
    }
}

fn offer_download(content: &GeneratedContent) -> io::Result<Option<()>> {
    let question = format!("Download Content to {}?", content.file_name);
    let Some(save) = confirm(&question, false)? else {
        return Ok(None);
    };
    if save {
        match strategist::export::save(Path::new("."), &content.file_name, &content.body) {
            Ok(path) => println!("Saved {}", path.display()),
            Err(error) => println!("Error saving content: {error}"),
        }
    }
    Ok(Some(()))
}

/// Resolve a 1-based menu choice against the listed options.
fn pick<T: Copy>(options: &[T], choice: &str) -> Option<T> {
    let index = choice.parse::<usize>().ok()?.checked_sub(1)?;
    options.get(index).copied()
}

fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF ends the session.
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
