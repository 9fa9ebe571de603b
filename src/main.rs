//! ngfilter - NG 워드 마스킹 데모 CLI
//!
//! 표준 입력의 문장들을 사전으로 걸러 표준 출력에 내보냅니다.
//! 사전은 JSON 배열 파일, 전략은 인자로 선택합니다.

use ngfilter::config::load_config;
use ngfilter::dict::Dictionary;
use ngfilter::filter::{
    redact_batch, Filter, LocalAlignment, LocalAlignmentDebug, LocalAlignmentTrie, PerfectMatch,
};
use ngfilter::score::ConfusableTable;
use std::io::BufRead;
use std::process::ExitCode;

fn usage() {
    eprintln!("사용법: ngfilter <사전.json> [전략] [설정.json]");
    eprintln!();
    eprintln!("전략:");
    eprintln!("  perfect   전역 항목 리터럴 치환");
    eprintln!("  align     국소 정렬 (기본, 단어별 임계값)");
    eprintln!("  adaptive  국소 정렬 (단어 길이 보정 임계값)");
    eprintln!("  trie      트라이 잡음 허용 스캔");
    eprintln!("  debug     국소 정렬 + 단어별 유사도 보고");
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(dict_path) = args.first() else {
        usage();
        return ExitCode::FAILURE;
    };
    let mode = args.get(1).map(String::as_str).unwrap_or("align");
    let config = match args.get(2) {
        Some(path) => load_config(path),
        None => Default::default(),
    };

    // 사전 로드: 잘못된 행이 하나라도 있으면 즉시 중단
    let dict = match Dictionary::load_json(dict_path) {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("사전을 불러오지 못했습니다: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    let sentences: Vec<String> = match stdin.lock().lines().collect() {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("입력 읽기 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let table = ConfusableTable::korean_defaults();

    // 진단 모드는 문장별 보고서를 함께 출력 (순차 처리)
    if mode == "debug" {
        let filter = LocalAlignmentDebug::new(&dict, table);
        for sentence in &sentences {
            let (result, report) = filter.redact_with_report(sentence);
            println!("{}", result.masked);
            for ws in report.iter().take(3) {
                println!("  {:.3}  {}", ws.similarity, ws.word);
            }
        }
        return ExitCode::SUCCESS;
    }

    let filter: Box<dyn Filter + Sync> = match mode {
        "perfect" => Box::new(PerfectMatch::new(&dict).with_mask_token(&config.mask_token)),
        "align" => Box::new(LocalAlignment::new(&dict, table).with_mask_char(config.mask_char)),
        "adaptive" => Box::new(
            LocalAlignment::with_adaptive_threshold(&dict, table)
                .with_mask_char(config.mask_char),
        ),
        "trie" => Box::new(LocalAlignmentTrie::new(&dict).with_mask_char(config.mask_char)),
        other => {
            eprintln!("알 수 없는 전략: {}", other);
            usage();
            return ExitCode::FAILURE;
        }
    };

    match redact_batch(filter.as_ref(), &sentences, config.max_in_flight) {
        Ok(results) => {
            for result in results {
                println!("{}", result.masked);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("배치 처리 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}
