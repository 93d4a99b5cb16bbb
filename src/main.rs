// Line-oriented demo host: every stdin line is a keystroke burst or a
// `:command`; session events are printed to stdout as JSON.

use locale_translator_lib::core::session::TranslatorSession;
use locale_translator_lib::shared::emit::EventEmitter;
use locale_translator_lib::shared::types::SourceLanguage;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    locale_translator_lib::init_tracing();

    let settings = locale_translator_lib::load_settings().await;
    let (emitter, mut events) = EventEmitter::channel();
    let session = match locale_translator_lib::start_session(&settings, emitter) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to start session: {}", e);
            std::process::exit(1);
        }
    };

    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{}", line),
                Err(e) => tracing::error!("Failed to serialize event: {}", e),
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if !handle_line(&session, &settings, &line).await {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }
}

/// Returns `false` when the host should exit.
async fn handle_line(
    session: &TranslatorSession,
    settings: &locale_translator_lib::shared::settings::AppSettings,
    line: &str,
) -> bool {
    let languages = session.orchestrator().languages();
    let (command, arg) = match line.strip_prefix(':') {
        Some(rest) => {
            let mut parts = rest.splitn(2, ' ');
            (parts.next().unwrap_or_default(), parts.next().unwrap_or_default().trim())
        }
        None => {
            session.on_input_changed(line);
            return true;
        }
    };

    match command {
        "quit" | "q" => return false,
        "translate" => {
            session.translate_now().await;
        }
        "speech" => {
            session.on_speech_transcript(arg).await;
        }
        "target" => match languages.find_by_code(arg) {
            Some(lang) => session.on_target_selected(lang),
            None => println!("unknown language code '{}'", arg),
        },
        "source" => {
            if arg == "auto" {
                session.on_source_selected(SourceLanguage::Auto);
            } else if let Some(lang) = languages.find_by_code(arg) {
                session.on_source_selected(SourceLanguage::Fixed(lang));
            } else {
                println!("unknown language code '{}'", arg);
            }
        }
        "languages" => {
            for lang in languages.list_all_languages() {
                println!("{}\t{}", lang.code, lang.name);
            }
        }
        "locate" => {
            if let Err(e) = locale_translator_lib::spawn_location_detection(session, settings).await {
                tracing::error!("Location detection task failed: {}", e);
            }
        }
        "speak" => match session.speech_request(&[]) {
            Some(request) => println!("speak [{}]: {}", request.lang, request.text),
            None => println!("nothing to speak"),
        },
        "state" => match serde_json::to_string_pretty(&session.state()) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to serialize state: {}", e),
        },
        "settings" => match serde_json::to_string_pretty(&settings.masked()) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to serialize settings: {}", e),
        },
        other => println!("unknown command ':{}'", other),
    }
    true
}
