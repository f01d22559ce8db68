// ==========================================
// 电弧炉钢渣利用决策工具 - 命令行主入口
// ==========================================
// 技术栈: Rust + serde + tracing
// 系统定位: 决策支持系统
// ==========================================

use std::path::PathBuf;
use std::process::ExitCode;

use eaf_slag_dst::api::{EvaluationApi, EvaluationRequest};
use eaf_slag_dst::report::ReportRenderer;
use eaf_slag_dst::{i18n, logging, APP_NAME, VERSION};

fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    // 语言切换 (en / de)
    if let Ok(locale) = std::env::var("EAF_SLAG_DST_LOCALE") {
        let trimmed = locale.trim();
        if !trimmed.is_empty() {
            i18n::set_locale(trimmed);
            tracing::info!("使用语言: {}", i18n::current_locale());
        }
    }

    let (request_path, json_output) = parse_args();

    let api = EvaluationApi::new();

    // 请求来源: 命令行参数 > 环境变量 > 默认请求文件 > 内置示例输入
    let result = match request_path.or_else(default_request_path) {
        Some(path) => {
            tracing::info!("使用请求文件: {}", path.display());
            api.evaluate_request_file(&path)
        }
        None => {
            tracing::info!("未提供请求文件,使用内置示例输入");
            api.evaluate(&EvaluationRequest::default())
        }
    };

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("评估失败: {}", err);
            eprintln!("evaluation failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    if json_output {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!("报告序列化失败: {}", err);
                eprintln!("report serialization failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", ReportRenderer::new().render(&report));
    }

    ExitCode::SUCCESS
}

/// 解析命令行参数
///
/// # 返回
/// - (请求文件路径, 是否以 JSON 输出报告)
fn parse_args() -> (Option<PathBuf>, bool) {
    let mut request_path = None;
    let mut json_output = false;

    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else if request_path.is_none() {
            request_path = Some(PathBuf::from(arg));
        }
    }

    (request_path, json_output)
}

/// 默认请求文件路径
///
/// # 解析顺序
/// - 环境变量 EAF_SLAG_DST_REQUEST（便于调试/测试/CI）
/// - 用户数据目录/eaf-slag-dst/request.json（存在时才使用）
fn default_request_path() -> Option<PathBuf> {
    // 允许通过环境变量显式指定请求路径
    if let Ok(path) = std::env::var("EAF_SLAG_DST_REQUEST") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    let path = dirs::data_dir()?.join("eaf-slag-dst").join("request.json");
    path.exists().then_some(path)
}
