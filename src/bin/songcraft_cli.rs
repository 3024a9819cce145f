//! songcraft-cli: exercise the songwriting AI operations from a terminal
//!
//! Usage:
//!   songcraft-cli hiragana <text>                 Convert lyrics to Hiragana
//!   songcraft-cli lyrics <keywords>               Draft lyrics from keywords
//!   songcraft-cli suno [--x N] [--y N] ...        Build a Suno style prompt
//!   songcraft-cli chat                            Chat with the producer (stdin)

use std::io::BufRead;

use songcraft_ai::media::pcm::encode_base64;
use songcraft_ai::{AiGatewayClient, PromptParams, StyleVocabulary};
use tracing_subscriber::EnvFilter;

const DEFAULT_GENRES: &[&str] = &[
    "J-Pop", "Rock", "City Pop", "R&B", "Hip Hop", "EDM", "Jazz", "Ballad", "Anime", "Folk",
];
const DEFAULT_TEXTURES: &[&str] = &["Breathy", "Raspy", "Clear", "Powerful", "Whisper", "Falsetto"];
const DEFAULT_INSTRUMENTS: &[&str] = &[
    "Piano", "Acoustic Guitar", "Electric Guitar", "Synthesizer", "Strings", "Slap Bass", "Saxophone",
];

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "version" | "--version" | "-V" => {
            println!("songcraft-cli {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {}
    }

    let client = match AiGatewayClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let rest = &args[2..];
    match args[1].as_str() {
        "hiragana" => println!("{}", client.convert_to_hiragana(&positional(rest)).await),
        "lyrics" => print_option(client.generate_lyrics(&positional(rest)).await),
        "suno" => cmd_suno(&client, rest).await,
        "artist" => cmd_artist(&client, rest).await,
        "audio" => cmd_audio(&client, rest).await,
        "visual" => print_json(client.generate_visual_prompts(&positional(rest)).await),
        "video" => print_json(
            client
                .generate_video_prompt_for_section(&positional(rest))
                .await,
        ),
        "image" => print_option(client.generate_image(&positional(rest)).await),
        "voice" => {
            let x = number_flag(rest, "--x").unwrap_or(0.0);
            let y = number_flag(rest, "--y").unwrap_or(0.0);
            client.play_voice_sample(&positional(rest), x, y).await;
        }
        "chat" => cmd_chat(&client).await,
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"songcraft-cli: songwriting assistant backed by Gemini

USAGE:
    songcraft-cli <COMMAND> [OPTIONS]

COMMANDS:
    hiragana <text>                     Convert Japanese lyrics to Hiragana
    lyrics <keywords>                   Draft Japanese lyrics from keywords
    suno [--x N] [--y N] [--genre G]... [--texture T]... [--instrument I]... [--artist A]
                                        Build a Suno style prompt
    artist <name>                       Analyze an artist's style
    audio <file> [--mime TYPE]          Analyze a recorded vocal
    visual <lyrics>                     Scene caption + image prompt
    video <lyrics section>              Scene caption + video prompt
    image <prompt>                      Generate an image (prints a data URI)
    voice <text> [--x N] [--y N]        Speak a voice sample
    chat                                Chat with the producer, one message per stdin line
    version                             Show version information
    help                                Show this help message

ENVIRONMENT:
    GEMINI_API_KEY                      API credential
    SONGCRAFT_BASE_URL                  Service base URL override
    RUST_LOG                            Log filter (default: info)"#
    );
}

/// Arguments that are neither flags nor flag values, joined by spaces.
fn positional(args: &[String]) -> String {
    let mut words = Vec::new();
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
            continue;
        }
        if arg.starts_with("--") {
            skip = true;
            continue;
        }
        words.push(arg.as_str());
    }
    words.join(" ")
}

fn flag_values<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
    args.iter()
        .enumerate()
        .filter(|(_, a)| a.as_str() == flag)
        .filter_map(|(i, _)| args.get(i + 1).map(String::as_str))
        .collect()
}

fn number_flag(args: &[String], flag: &str) -> Option<f64> {
    flag_values(args, flag)
        .last()
        .and_then(|v| v.parse::<f64>().ok())
}

fn print_option(value: Option<String>) {
    match value {
        Some(v) => println!("{v}"),
        None => {
            eprintln!("No result (see log for details).");
            std::process::exit(2);
        }
    }
}

fn print_json<T: serde::Serialize>(value: Option<T>) {
    print_option(value.and_then(|v| serde_json::to_string_pretty(&v).ok()));
}

async fn cmd_suno(client: &AiGatewayClient, args: &[String]) {
    let owned = |flag: &str| -> Vec<String> {
        flag_values(args, flag).into_iter().map(String::from).collect()
    };
    let params = PromptParams {
        vocal_x: number_flag(args, "--x").unwrap_or(0.0),
        vocal_y: number_flag(args, "--y").unwrap_or(0.0),
        genres: owned("--genre"),
        textures: owned("--texture"),
        instruments: owned("--instrument"),
        artist: flag_values(args, "--artist").last().map(|s| s.to_string()),
    };
    println!("{}", client.generate_suno_prompt(&params).await);
}

async fn cmd_artist(client: &AiGatewayClient, args: &[String]) {
    let vocabulary = StyleVocabulary::new(
        DEFAULT_GENRES.iter().copied(),
        DEFAULT_TEXTURES.iter().copied(),
        DEFAULT_INSTRUMENTS.iter().copied(),
    );
    print_json(
        client
            .analyze_artist_style(&positional(args), &vocabulary)
            .await,
    );
}

async fn cmd_audio(client: &AiGatewayClient, args: &[String]) {
    let path = positional(args);
    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: cannot read {path}: {e}");
            std::process::exit(1);
        }
    };
    let mime = flag_values(args, "--mime")
        .last()
        .copied()
        .unwrap_or_else(|| guess_audio_mime(&path));
    print_json(
        client
            .analyze_vocal_audio(&encode_base64(&bytes), mime)
            .await,
    );
}

fn guess_audio_mime(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        "flac" => "audio/flac",
        _ => "audio/webm",
    }
}

async fn cmd_chat(client: &AiGatewayClient) {
    let Some(mut session) = client.create_chat_session() else {
        eprintln!("Error: could not open a chat session (see log for details).");
        std::process::exit(1);
    };
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        match session.send_message(&line).await {
            Some(reply) => println!("{reply}\n"),
            None => eprintln!("(no reply)"),
        }
    }
}
