// ==========================================
// 电弧炉钢渣利用决策工具 - 评估编排引擎
// ==========================================
// 职责: 校验阈值 → 筛查 → 评分 → 排名 → 建议, 产出单次评估结果
// 红线: 纯计算,无 ID/时间戳/I-O; 同输入必同输出
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::thresholds::ThresholdSet;
use crate::domain::chemistry::{ChemistryInput, FacilityAvailability};
use crate::domain::route::EvaluationOutcome;
use crate::engine::advisory::AdvisoryEngine;
use crate::engine::ranking::RouteRanker;
use crate::engine::route_scoring::RouteScoringEngine;
use crate::engine::screening_core::ScreeningCore;

// ==========================================
// EvaluationEngine - 评估编排引擎
// ==========================================
pub struct EvaluationEngine {
    scoring: RouteScoringEngine,
    ranker: RouteRanker,
    advisory: AdvisoryEngine,
}

impl EvaluationEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            scoring: RouteScoringEngine::new(),
            ranker: RouteRanker::new(),
            advisory: AdvisoryEngine::new(),
        }
    }

    /// 执行一次完整评估
    ///
    /// # 参数
    /// - `chemistry`: 渣料化学快照
    /// - `thresholds`: 三金属断点集合 (此处统一校验)
    /// - `availability`: 本地设施可用性
    ///
    /// # 返回
    /// - Ok(EvaluationOutcome): 筛查汇总 + 降序路径 + 建议 + 提示
    /// - Err(ConfigError): 断点校验失败
    pub fn evaluate(
        &self,
        chemistry: &ChemistryInput,
        thresholds: &ThresholdSet,
        availability: &FacilityAvailability,
    ) -> ConfigResult<EvaluationOutcome> {
        thresholds.validate()?;

        let screening = ScreeningCore::screen(chemistry, thresholds);
        let routes = self.scoring.score_all(chemistry, availability, &screening);
        let ranked = self.ranker.rank(routes);
        let required_actions = self.advisory.required_actions(chemistry);
        let cautions = self.advisory.cautions(chemistry, availability, &screening);

        if let Some(top) = ranked.first() {
            tracing::info!(
                severity = %screening.severity,
                recommended = %top.route.kind,
                top_score = top.route.score,
                "评估完成"
            );
        }

        Ok(EvaluationOutcome {
            screening,
            routes: ranked,
            required_actions,
            cautions,
        })
    }
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        Self::new()
    }
}
