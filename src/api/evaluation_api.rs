// ==========================================
// 电弧炉钢渣利用决策工具 - 评估 API
// ==========================================
// 职责: 请求解析、输入校验、阈值模式解析、报告封装
// 红线: 表单范围在此层拦截,引擎只做业务规则; 每条结论必须带理由 (可解释性)
// ==========================================

use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::api::validator::{InputValidator, ValidationMode};
use crate::config::thresholds::ThresholdSet;
use crate::domain::chemistry::{ChemistryInput, FacilityAvailability, ReferenceLinks};
use crate::domain::route::EvaluationOutcome;
use crate::domain::types::{ExpansionRisk, ThresholdMode};
use crate::engine::evaluator::EvaluationEngine;

// ==========================================
// ChemistryDto - 化学成分传输对象
// ==========================================

/// 化学成分输入（缺省值与交互表单一致）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChemistryDto {
    /// FeO 含量 (%)
    #[serde(default = "default_feo_pct")]
    pub feo_pct: f64,
    /// 碱度 (CaO/SiO₂)
    #[serde(default = "default_basicity")]
    pub basicity: f64,
    /// 膨胀风险: LOW / MEDIUM / HIGH（宽松解析,缺省 MEDIUM）
    #[serde(default)]
    pub expansion_risk: Option<String>,
    /// 铬总量 (wt%)
    #[serde(default = "default_cr_wt_pct")]
    pub cr_wt_pct: f64,
    /// 铅总量
    #[serde(default = "default_pb_wt_pct")]
    pub pb_wt_pct: f64,
    /// 锌总量 (wt%)
    #[serde(default = "default_zn_wt_pct")]
    pub zn_wt_pct: f64,
}

fn default_feo_pct() -> f64 {
    25.0
}

fn default_basicity() -> f64 {
    2.0
}

fn default_cr_wt_pct() -> f64 {
    0.8
}

fn default_pb_wt_pct() -> f64 {
    150.0
}

fn default_zn_wt_pct() -> f64 {
    0.6
}

impl ChemistryDto {
    /// 转换为领域输入（风险字符串宽松解析）
    pub fn to_domain(&self) -> ChemistryInput {
        ChemistryInput {
            feo_pct: self.feo_pct,
            basicity: self.basicity,
            expansion_risk: ExpansionRisk::from_str(
                self.expansion_risk.as_deref().unwrap_or("MEDIUM"),
            ),
            cr_wt_pct: self.cr_wt_pct,
            pb_wt_pct: self.pb_wt_pct,
            zn_wt_pct: self.zn_wt_pct,
        }
    }
}

impl Default for ChemistryDto {
    fn default() -> Self {
        Self {
            feo_pct: default_feo_pct(),
            basicity: default_basicity(),
            expansion_risk: None,
            cr_wt_pct: default_cr_wt_pct(),
            pb_wt_pct: default_pb_wt_pct(),
            zn_wt_pct: default_zn_wt_pct(),
        }
    }
}

// ==========================================
// EvaluationRequest - 评估请求
// ==========================================

/// 单次评估请求（JSON 边界,枚举字段用宽松字符串）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// 渣料化学成分
    #[serde(default)]
    pub chemistry: ChemistryDto,
    /// 本地设施可用性（缺省全开）
    #[serde(default)]
    pub availability: FacilityAvailability,
    /// 阈值模式: ILLUSTRATIVE_DEFAULTS / CUSTOM（缺省前者）
    #[serde(default)]
    pub threshold_mode: Option<String>,
    /// CUSTOM 模式的内联断点
    #[serde(default)]
    pub thresholds: Option<ThresholdSet>,
    /// CUSTOM 模式的断点文件路径（内联断点优先）
    #[serde(default)]
    pub threshold_file: Option<PathBuf>,
    /// 校验模式: STRICT / CLAMP（缺省 STRICT）
    #[serde(default)]
    pub validation_mode: Option<String>,
    /// 法规来源链接（透传到报告）
    #[serde(default)]
    pub links: ReferenceLinks,
}

// ==========================================
// EvaluationReport - 评估报告视图
// ==========================================

/// 用于前端展示的完整评估报告（筛查 + 排名 + 措施 + 提示）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub report_id: String,
    pub generated_at: NaiveDateTime,
    pub screening: ScreeningView,
    pub ranking: RankingView,
    pub routes: Vec<RouteView>,
    pub required_actions: Vec<String>,
    pub cautions: Vec<CautionView>,
    #[serde(default, skip_serializing_if = "ReferenceLinks::is_empty")]
    pub links: ReferenceLinks,
}

/// 筛查汇总视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningView {
    /// 三金属旗级 (固定顺序 Cr/Pb/Zn)
    pub metals: Vec<MetalFlagView>,
    pub penalty_sum: u32,
    pub severity: String,       // LOW / MEDIUM / HIGH
    pub severity_badge: String, // 带图标徽标
}

/// 单金属筛查视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalFlagView {
    pub metal: String, // 展示名称,如 "Chromium (Cr)"
    pub measured_wt_pct: f64,
    pub flag: String,  // GREEN / AMBER / RED
    pub label: String, // 带图标标签
    pub penalty: u32,
}

/// 排名速览（前三序位的路径全称）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingView {
    pub recommended: String,
    pub alternative: String,
    pub third_option: String,
}

/// 单路径视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteView {
    pub rank: usize,
    pub tag: String,  // 带图标序位标签
    pub kind: String, // ROAD_CONSTRUCTION / CEMENT_BINDER / METAL_RECOVERY / LANDFILL
    pub title: String,
    pub score: f64,
    pub why: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// 提示视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CautionView {
    pub level: String, // INFO / WARNING / ERROR
    pub message: String,
}

// ==========================================
// EvaluationApi - 评估 API
// ==========================================

/// 评估API
///
/// 职责：
/// 1. 请求解析与输入校验（表单范围在此层拦截）
/// 2. 阈值模式解析（示例默认值 / 自定义断点 / 断点文件）
/// 3. 调用评估引擎并封装报告
pub struct EvaluationApi {
    validator: InputValidator,
    engine: EvaluationEngine,
}

impl EvaluationApi {
    /// 创建新的EvaluationApi实例
    pub fn new() -> Self {
        Self {
            validator: InputValidator::new(),
            engine: EvaluationEngine::new(),
        }
    }

    // ==========================================
    // 评估接口
    // ==========================================

    /// 执行一次完整评估
    ///
    /// # 参数
    /// - request: 评估请求
    ///
    /// # 返回
    /// - Ok(EvaluationReport): 完整报告
    /// - Err(ApiError): 输入校验失败 / 阈值配置非法
    pub fn evaluate(&self, request: &EvaluationRequest) -> ApiResult<EvaluationReport> {
        // 1. 校验模式解析（缺省 STRICT）
        let mode = ValidationMode::from_str(request.validation_mode.as_deref().unwrap_or(""));

        // 2. 化学成分转换 + 表单范围校验
        let chemistry = self
            .validator
            .validate_chemistry(&request.chemistry.to_domain(), mode)?;

        // 3. 阈值模式解析
        let thresholds = self.resolve_thresholds(request)?;

        // 4. 引擎评估（阈值合法性在引擎内校验）
        let outcome = self
            .engine
            .evaluate(&chemistry, &thresholds, &request.availability)?;

        // 5. 封装报告
        let report = Self::build_report(&outcome, &request.links);

        info!(
            report_id = %report.report_id,
            severity = %report.screening.severity,
            recommended = %report.ranking.recommended,
            "评估完成"
        );

        Ok(report)
    }

    /// 从 JSON 字符串评估
    ///
    /// # 参数
    /// - json: EvaluationRequest 的 JSON 序列化
    pub fn evaluate_json(&self, json: &str) -> ApiResult<EvaluationReport> {
        let request: EvaluationRequest = serde_json::from_str(json)?;
        self.evaluate(&request)
    }

    /// 从请求文件评估
    ///
    /// # 参数
    /// - path: JSON 请求文件路径
    pub fn evaluate_request_file(&self, path: &Path) -> ApiResult<EvaluationReport> {
        debug!(path = %path.display(), "读取评估请求文件");
        let raw = std::fs::read_to_string(path)?;
        self.evaluate_json(&raw)
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 解析阈值模式
    ///
    /// # 规则
    /// - 缺省 ILLUSTRATIVE_DEFAULTS
    /// - CUSTOM 模式: 内联断点优先,其次断点文件,两者皆缺报错
    fn resolve_thresholds(&self, request: &EvaluationRequest) -> ApiResult<ThresholdSet> {
        let mode = ThresholdMode::from_str(request.threshold_mode.as_deref().unwrap_or(""));

        match mode {
            ThresholdMode::IllustrativeDefaults => Ok(ThresholdSet::illustrative_defaults()),
            ThresholdMode::Custom => {
                if let Some(set) = &request.thresholds {
                    return Ok(set.clone());
                }
                if let Some(path) = &request.threshold_file {
                    return Ok(ThresholdSet::load_from_file(path)?);
                }
                Err(ApiError::InputValidationError {
                    reason: "custom threshold mode without thresholds".to_string(),
                    violations: vec![ValidationViolation {
                        violation_type: "THRESHOLDS_MISSING".to_string(),
                        field: "thresholds".to_string(),
                        reason: "threshold_mode=CUSTOM requires inline thresholds or threshold_file"
                            .to_string(),
                        details: None,
                    }],
                })
            }
        }
    }

    /// 由引擎结果与透传链接组装报告
    fn build_report(outcome: &EvaluationOutcome, links: &ReferenceLinks) -> EvaluationReport {
        let metals = outcome
            .screening
            .metal_flags()
            .iter()
            .map(|mf| MetalFlagView {
                metal: mf.metal.display_name().to_string(),
                measured_wt_pct: mf.measured_wt_pct,
                flag: mf.flag.to_string(),
                label: mf.label().to_string(),
                penalty: mf.penalty,
            })
            .collect();

        let routes = outcome
            .routes
            .iter()
            .map(|ranked| RouteView {
                rank: ranked.rank,
                tag: ranked.tag.label().to_string(),
                kind: ranked.route.kind.to_string(),
                title: ranked.route.title().to_string(),
                score: ranked.route.score,
                why: ranked.route.why.clone(),
                pros: ranked.route.pros().iter().map(|s| s.to_string()).collect(),
                cons: ranked.route.cons().iter().map(|s| s.to_string()).collect(),
            })
            .collect();

        // 前三序位的路径全称 (路径固定四条,越界兜底为空串)
        let title_at = |index: usize| -> String {
            outcome
                .routes
                .get(index)
                .map(|r| r.route.title().to_string())
                .unwrap_or_default()
        };

        EvaluationReport {
            report_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now().naive_utc(),
            screening: ScreeningView {
                metals,
                penalty_sum: outcome.screening.penalty_sum,
                severity: outcome.screening.severity.to_string(),
                severity_badge: outcome.screening.severity_badge().to_string(),
            },
            ranking: RankingView {
                recommended: title_at(0),
                alternative: title_at(1),
                third_option: title_at(2),
            },
            routes,
            required_actions: outcome.required_actions.clone(),
            cautions: outcome
                .cautions
                .iter()
                .map(|c| CautionView {
                    level: c.level.to_string(),
                    message: c.message.clone(),
                })
                .collect(),
            links: links.clone(),
        }
    }
}

impl Default for EvaluationApi {
    fn default() -> Self {
        Self::new()
    }
}
