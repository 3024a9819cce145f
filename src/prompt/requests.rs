//! Per-operation request templates.

use crate::structured::schema::{self, SchemaGenerator};
use crate::types::{GenerateContentRequest, PromptParams, StyleVocabulary};

use super::builder::PromptBuilder;
use super::vocal::{vocal_descriptor, Voice};

/// Hard length limit of a Suno style prompt, in characters.
pub const SUNO_PROMPT_MAX_CHARS: usize = 1000;

pub const MAX_GENRES: usize = 3;
pub const MAX_TEXTURES: usize = 2;
pub const MAX_INSTRUMENTS: usize = 2;

/// Persona bound to every chat session.
pub const PRODUCER_PERSONA: &str = "You are a professional music producer and lyricist assistant. \
Help the user write songs: give concrete advice on lyrics, melody, arrangement and production. \
Always respond in Japanese.";

const VOCAL_AXES: &str = "vocalX runs from -100 (clearly male voice) to 100 (clearly female voice); \
vocalY runs from -100 (very low pitch) to 100 (very high pitch).";

pub fn hiragana(text: &str) -> GenerateContentRequest {
    PromptBuilder::new()
        .text(format!(
            "Convert the following Japanese lyrics into their Hiragana reading.\n\
             Rules:\n\
             - Transliterate every kanji and katakana word phonetically into Hiragana.\n\
             - Preserve every line break exactly.\n\
             - Leave bracketed section tags such as [Verse] or [Chorus] unchanged.\n\
             - Leave English and other non-Japanese words unchanged.\n\
             - Output only the converted lyrics, with no explanation.\n\n\
             {}",
            text
        ))
        .build()
}

pub fn lyrics(keywords: &str) -> GenerateContentRequest {
    PromptBuilder::new()
        .text(format!(
            "Write original song lyrics in Japanese inspired by these keywords: {}\n\
             Rules:\n\
             - Mark every section with a bracketed tag on its own line, such as [Verse], [Chorus] and [Bridge].\n\
             - Write the lyrics in Japanese.\n\
             - Output only the lyrics, with no title or commentary.",
            keywords
        ))
        .build()
}

pub fn artist_style(artist_name: &str, vocabulary: &StyleVocabulary) -> GenerateContentRequest {
    let schema = SchemaGenerator::new()
        .require("vocalX", schema::number_in_range(-100.0, 100.0))
        .require("vocalY", schema::number_in_range(-100.0, 100.0))
        .require("genres", schema::enum_array(&vocabulary.genres, MAX_GENRES))
        .require("textures", schema::enum_array(&vocabulary.textures, MAX_TEXTURES))
        .require(
            "instruments",
            schema::enum_array(&vocabulary.instruments, MAX_INSTRUMENTS),
        )
        .build();

    PromptBuilder::new()
        .text(format!(
            "Analyze the musical style of the artist \"{artist}\".\n\
             {axes}\n\
             Choose up to {g} genres ONLY from: {genres}\n\
             Choose up to {t} vocal textures ONLY from: {textures}\n\
             Choose up to {i} characteristic instruments ONLY from: {instruments}\n\
             Answer with a JSON object with the fields vocalX, vocalY, genres, textures and instruments.",
            artist = artist_name,
            axes = VOCAL_AXES,
            g = MAX_GENRES,
            genres = vocabulary.genres.join(", "),
            t = MAX_TEXTURES,
            textures = vocabulary.textures.join(", "),
            i = MAX_INSTRUMENTS,
            instruments = vocabulary.instruments.join(", "),
        ))
        .json_schema(schema)
        .build()
}

pub fn vocal_audio(base64_audio: &str, mime_type: &str) -> GenerateContentRequest {
    let schema = SchemaGenerator::new()
        .require("vocalX", schema::number_in_range(-100.0, 100.0))
        .require("vocalY", schema::number_in_range(-100.0, 100.0))
        .require("textures", schema::enum_array(&[], MAX_TEXTURES))
        .build();

    PromptBuilder::new()
        .inline_data(mime_type, base64_audio)
        .text(format!(
            "Listen to the singing voice in this recording and characterize it.\n\
             {}\n\
             Also give up to {} short English words describing the vocal texture (e.g. Breathy, Raspy).\n\
             Answer with a JSON object with the fields vocalX, vocalY and textures.",
            VOCAL_AXES, MAX_TEXTURES
        ))
        .json_schema(schema)
        .build()
}

pub fn visual_prompts(lyrics: &str) -> GenerateContentRequest {
    let schema = SchemaGenerator::new()
        .require("sceneDescription", schema::string())
        .require("imagePrompt", schema::string())
        .build();

    PromptBuilder::new()
        .text(format!(
            "Read these song lyrics and imagine a single key visual for them.\n\
             - sceneDescription: the scene summarized in Japanese, within 30 characters.\n\
             - imagePrompt: a detailed English prompt for an image generator \
             (subject, setting, lighting, mood, art style).\n\n\
             Lyrics:\n{}",
            lyrics
        ))
        .json_schema(schema)
        .build()
}

pub fn video_prompt(lyrics_part: &str) -> GenerateContentRequest {
    let schema = SchemaGenerator::new()
        .require("sceneDescription", schema::string())
        .require("soraPrompt", schema::string())
        .build();

    PromptBuilder::new()
        .text(format!(
            "Design one music-video shot for this section of song lyrics.\n\
             - sceneDescription: the scene summarized in Japanese, within 30 characters.\n\
             - soraPrompt: a detailed English prompt for a text-to-video model \
             (subject, action, camera movement, lighting, mood).\n\n\
             Lyrics section:\n{}",
            lyrics_part
        ))
        .json_schema(schema)
        .build()
}

pub fn suno_prompt(params: &PromptParams) -> GenerateContentRequest {
    let artist_line = match params.artist.as_deref().map(str::trim) {
        Some(artist) if !artist.is_empty() => format!(
            "Reference artist: {} (use only to infer the sound; never write the artist's name in the output)\n",
            artist
        ),
        _ => String::new(),
    };

    PromptBuilder::new()
        .system_instruction(
            "You write style prompts for the Suno AI music generator. \
             You answer with style tags only.",
        )
        .text(format!(
            "Create a Suno style prompt from these settings.\n\
             Vocals: {vocals}\n\
             Vocal textures: {textures}\n\
             Genres: {genres}\n\
             Instruments: {instruments}\n\
             {artist_line}\
             Rules:\n\
             - Output a single line of comma-separated English tags.\n\
             - The whole output must be under {max} characters.\n\
             - Output only the tags.",
            vocals = vocal_descriptor(params.vocal_x, params.vocal_y),
            textures = join_or_none(&params.textures),
            genres = join_or_none(&params.genres),
            instruments = join_or_none(&params.instruments),
            artist_line = artist_line,
            max = SUNO_PROMPT_MAX_CHARS,
        ))
        .build()
}

pub fn image(prompt: &str) -> GenerateContentRequest {
    PromptBuilder::new()
        .text(prompt)
        .response_modalities(&["IMAGE"])
        .build()
}

pub fn speech(text: &str, voice: Voice) -> GenerateContentRequest {
    PromptBuilder::new()
        .text(text)
        .response_modalities(&["AUDIO"])
        .voice(voice.as_str())
        .build()
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
