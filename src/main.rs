//! korean-text - 한국어 텍스트 처리 CLI
//!
//! 사용법: korean-text [--config <path>] [--nouns <w1,w2,...>] <command> [text...]
//! 텍스트 인자가 없으면 표준 입력을 읽습니다.

use korean_text::config::{config_path, load_config};
use korean_text::KoreanProcessor;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "사용법: korean-text [--config <path>] [--nouns <w1,w2,...>] \
<normalize|tokenize|stem|sentences|phrases|detokenize> [text...]";

/// 파싱된 명령행
struct Args {
    config: Option<PathBuf>,
    nouns: Vec<String>,
    command: String,
    rest: Vec<String>,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut config = None;
    let mut nouns = Vec::new();
    let mut command = None;
    let mut rest = Vec::new();

    while let Some(arg) = raw.next() {
        if command.is_some() {
            rest.push(arg);
            continue;
        }
        match arg.as_str() {
            "--config" => {
                let path = raw.next().ok_or("--config 뒤에 경로가 필요합니다")?;
                config = Some(PathBuf::from(path));
            }
            "--nouns" => {
                let list = raw.next().ok_or("--nouns 뒤에 단어 목록이 필요합니다")?;
                nouns.extend(
                    list.split(',')
                        .map(str::trim)
                        .filter(|w| !w.is_empty())
                        .map(str::to_string),
                );
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ => command = Some(arg),
        }
    }

    let command = command.ok_or_else(|| USAGE.to_string())?;
    Ok(Args {
        config,
        nouns,
        command,
        rest,
    })
}

/// 인자 텍스트 또는 표준 입력
fn input_text(rest: &[String]) -> io::Result<String> {
    if !rest.is_empty() {
        return Ok(rest.join(" "));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}

fn run(args: Args) -> Result<Vec<String>, String> {
    let config = args
        .config
        .or_else(config_path)
        .map(|path| load_config(&path))
        .unwrap_or_default();
    let processor = KoreanProcessor::with_config(config);

    if !args.nouns.is_empty() {
        let added = processor.add_nouns_to_dictionary(&args.nouns);
        log::info!("사용자 명사 {}개 추가", added);
    }

    let text = input_text(&args.rest).map_err(|e| format!("입력 읽기 실패: {}", e))?;
    let lines = match args.command.as_str() {
        "normalize" => vec![processor.normalize(&text)],
        "tokenize" => processor
            .tokenize(&text)
            .iter()
            .map(|t| t.to_string())
            .collect(),
        "stem" => vec![processor.stem_text(&text)],
        "sentences" => processor
            .split_sentences(&text)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        "phrases" => {
            // 구 추출은 어간 추출 전 토큰 기준
            let config = processor.config();
            let tokens = processor.tokenize_with_options(
                &text,
                config.normalizer_enabled,
                false,
                config.keep_space_enabled,
            );
            processor
                .extract_phrases(&tokens)
                .iter()
                .map(|p| p.to_string())
                .collect()
        }
        "detokenize" => {
            let words: Vec<&str> = text.split_whitespace().collect();
            vec![processor.detokenize(&words)]
        }
        other => return Err(format!("알 수 없는 명령: {}\n{}", other, USAGE)),
    };
    Ok(lines)
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::from(2)
        }
    }
}
