// ==========================================
// 电弧炉钢渣利用决策工具 - 路径评分引擎
// ==========================================
// 职责: 四条利用路径的启发式加减分
// 输入: 化学快照 + 设施可用性 + 筛查汇总
// 输出: Vec<Route> (固定顺序: 道路 → 水泥 → 金属回收 → 填埋)
// 红线: 评分只用于排序,不改变筛查旗级
// ==========================================

use crate::domain::chemistry::{ChemistryInput, FacilityAvailability};
use crate::domain::route::Route;
use crate::domain::screening::{ScreeningAssessment, ScreeningSummary};
use crate::domain::types::{ExpansionRisk, RouteKind, SeverityTier};

// ==========================================
// RouteScoringEngine - 路径评分引擎
// ==========================================
pub struct RouteScoringEngine {
    // 无状态引擎,不需要注入依赖
}

impl RouteScoringEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 四路径评分
    ///
    /// # 规则
    /// - 生成顺序固定: 道路 → 水泥 → 金属回收 → 填埋
    /// - 排序由 RouteRanker 负责,此处不排序 (同分材料保持此顺序)
    ///
    /// # 参数
    /// - `chemistry`: 渣料化学快照
    /// - `availability`: 本地设施可用性
    /// - `screening`: 筛查汇总
    pub fn score_all(
        &self,
        chemistry: &ChemistryInput,
        availability: &FacilityAvailability,
        screening: &ScreeningSummary,
    ) -> Vec<Route> {
        let routes = vec![
            self.score_road(chemistry, availability, screening),
            self.score_cement(chemistry, availability, screening),
            self.score_metal_recovery(chemistry, availability, screening),
            self.score_landfill(availability, screening),
        ];

        for route in &routes {
            tracing::debug!(kind = %route.kind, score = route.score, "路径评分完成");
        }

        routes
    }

    /// 可得性基础分 (道路/水泥/金属回收共用)
    fn base_availability_score(available: bool) -> f64 {
        if available {
            4.0
        } else {
            -8.0
        }
    }

    // ==========================================
    // 单路径评分 (加减分与理由逐条对应)
    // ==========================================

    /// 道路/骨料路径
    ///
    /// # 规则
    /// - 可得性 +4/-8
    /// - 膨胀风险 High -4 / Medium -1 / Low +2
    /// - 扣减和 × 0.6 减分
    /// - 等级非 High 时资源化偏好 +2
    fn score_road(
        &self,
        chemistry: &ChemistryInput,
        availability: &FacilityAvailability,
        screening: &ScreeningSummary,
    ) -> Route {
        let mut score = 0.0;
        let mut why = Vec::new();

        score += Self::base_availability_score(availability.road_outlet);
        why.push(
            if availability.road_outlet {
                "Road/aggregate outlet is available."
            } else {
                "No road/aggregate outlet available (major barrier)."
            }
            .to_string(),
        );

        match chemistry.expansion_risk {
            ExpansionRisk::High => {
                score -= 4.0;
                why.push(
                    "High free CaO risk penalizes road use unless conditioning/aging is applied."
                        .to_string(),
                );
            }
            ExpansionRisk::Medium => {
                score -= 1.0;
                why.push(
                    "Medium free CaO risk: road use may require aging and stability testing."
                        .to_string(),
                );
            }
            ExpansionRisk::Low => {
                score += 2.0;
                why.push("Low expansion risk supports aggregate use (with QA).".to_string());
            }
        }

        score -= f64::from(screening.penalty_sum) * 0.6;
        match screening.severity {
            SeverityTier::High => why.push(
                "Environmental screening is HIGH → road use likely restricted unless encapsulated/controlled and proven by leaching tests."
                    .to_string(),
            ),
            SeverityTier::Medium => why.push(
                "Environmental screening is MEDIUM → controlled use + leaching testing recommended."
                    .to_string(),
            ),
            SeverityTier::Low => why.push(
                "Environmental screening is LOW → fewer environmental constraints expected (still test)."
                    .to_string(),
            ),
        }

        if !screening.compliance_risk_is_severe() {
            score += 2.0;
            why.push(
                "Recycling preference: road/aggregate route favored when compliance risk is not severe."
                    .to_string(),
            );
        }

        Route {
            kind: RouteKind::RoadConstruction,
            score,
            why,
        }
    }

    /// 水泥/胶凝材料路径
    ///
    /// # 规则
    /// - 可得性 +4/-8
    /// - 膨胀风险 High -3 / Medium -1 / Low +1 (Low 档不附理由)
    /// - 碱度 ≥2.0 +2 / ≥1.5 +1 / 其余 -1
    /// - 扣减和 × 0.45 减分
    /// - 等级非 High 时资源化偏好 +2
    fn score_cement(
        &self,
        chemistry: &ChemistryInput,
        availability: &FacilityAvailability,
        screening: &ScreeningSummary,
    ) -> Route {
        let mut score = 0.0;
        let mut why = Vec::new();

        score += Self::base_availability_score(availability.cement_outlet);
        why.push(
            if availability.cement_outlet {
                "Cement/binder outlet is available."
            } else {
                "No cement/binder outlet available (major barrier)."
            }
            .to_string(),
        );

        match chemistry.expansion_risk {
            ExpansionRisk::High => {
                score -= 3.0;
                why.push(
                    "High free CaO risk penalizes direct cement/binder use without conditioning."
                        .to_string(),
                );
            }
            ExpansionRisk::Medium => {
                score -= 1.0;
                why.push("Medium free CaO risk: conditioning recommended.".to_string());
            }
            ExpansionRisk::Low => {
                score += 1.0;
            }
        }

        if chemistry.basicity >= 2.0 {
            score += 2.0;
            why.push(
                "Basicity supports potential binder/encapsulation use (performance must be tested)."
                    .to_string(),
            );
        } else if chemistry.basicity >= 1.5 {
            score += 1.0;
            why.push(
                "Basicity is moderate; cement route may still work depending on tests and blending."
                    .to_string(),
            );
        } else {
            score -= 1.0;
            why.push(
                "Low basicity slightly penalizes binder route unless blended/engineered."
                    .to_string(),
            );
        }

        score -= f64::from(screening.penalty_sum) * 0.45;
        match screening.severity {
            SeverityTier::High => why.push(
                "Environmental screening HIGH: cement/encapsulation might still be possible but requires strict QA + compliance proof."
                    .to_string(),
            ),
            SeverityTier::Medium => why.push(
                "Environmental screening MEDIUM: cement route often feasible with testing and controlled formulation."
                    .to_string(),
            ),
            SeverityTier::Low => why.push(
                "Environmental screening LOW: cement route likely feasible subject to product standards/testing."
                    .to_string(),
            ),
        }

        if !screening.compliance_risk_is_severe() {
            score += 2.0;
            why.push(
                "Recycling preference: cement/encapsulation favored when compliance risk is not severe."
                    .to_string(),
            );
        }

        Route {
            kind: RouteKind::CementBinder,
            score,
            why,
        }
    }

    /// 金属回收优先路径
    ///
    /// # 规则
    /// - 可得性 +4/-8
    /// - FeO ≥25 +4 / ≥15 +2 / 其余 +0 (均附理由)
    /// - 扣减和 × 0.2 减分
    /// - 设施可用时再 +2 (与基础分叠加)
    /// - 资源化偏好理由无条件追加
    fn score_metal_recovery(
        &self,
        chemistry: &ChemistryInput,
        availability: &FacilityAvailability,
        screening: &ScreeningSummary,
    ) -> Route {
        let mut score = 0.0;
        let mut why = Vec::new();

        score += Self::base_availability_score(availability.metal_recovery_outlet);
        why.push(
            if availability.metal_recovery_outlet {
                "Metal recovery facility is available."
            } else {
                "No metal recovery facility available (major barrier)."
            }
            .to_string(),
        );

        if chemistry.feo_pct >= 25.0 {
            score += 4.0;
            why.push(
                "High FeO suggests higher potential value from beneficiation/metal recovery (site-specific)."
                    .to_string(),
            );
        } else if chemistry.feo_pct >= 15.0 {
            score += 2.0;
            why.push(
                "Moderate FeO: metal recovery may still be worthwhile depending on metallic Fe entrainment."
                    .to_string(),
            );
        } else {
            score += 0.0;
            why.push(
                "Low FeO: metal recovery value may be limited unless metallic Fe content is high."
                    .to_string(),
            );
        }

        score -= f64::from(screening.penalty_sum) * 0.2;
        if screening.compliance_risk_is_severe() {
            why.push(
                "Environmental screening HIGH: metal recovery remains useful as a pre-treatment before final outlet selection."
                    .to_string(),
            );
        } else {
            why.push(
                "Environmental screening not severe: metal recovery can improve overall circularity and reduce landfill need."
                    .to_string(),
            );
        }

        score += if availability.metal_recovery_outlet {
            2.0
        } else {
            0.0
        };
        why.push(
            "Recycling preference: metal recovery is recommended as a first step when available."
                .to_string(),
        );

        Route {
            kind: RouteKind::MetalRecovery,
            score,
            why,
        }
    }

    /// 填埋处置路径
    ///
    /// # 规则
    /// - 可得性 +2/-10 (不走共用基础分)
    /// - 兜底定位固定 -4
    /// - 等级 High +8 / Medium +2 / Low -1
    /// - 三条资源化出路全关时 +8
    fn score_landfill(
        &self,
        availability: &FacilityAvailability,
        screening: &ScreeningSummary,
    ) -> Route {
        let mut score = 0.0;
        let mut why = Vec::new();

        score += if availability.landfill_outlet {
            2.0
        } else {
            -10.0
        };
        why.push(
            if availability.landfill_outlet {
                "Landfill option available."
            } else {
                "No landfill option available (constraint)."
            }
            .to_string(),
        );

        score -= 4.0;
        why.push("Landfill is treated as a last-resort option (circularity preference).".to_string());

        match screening.severity {
            SeverityTier::High => {
                score += 8.0;
                why.push(
                    "Environmental screening HIGH: disposal/controlled landfill may be necessary if reuse cannot meet compliance."
                        .to_string(),
                );
            }
            SeverityTier::Medium => {
                score += 2.0;
                why.push(
                    "Environmental screening MEDIUM: landfill may be used if markets/tests fail."
                        .to_string(),
                );
            }
            SeverityTier::Low => {
                score -= 1.0;
                why.push(
                    "Environmental screening LOW: reuse routes should usually be prioritized over landfill."
                        .to_string(),
                );
            }
        }

        if !availability.has_valorization_outlet() {
            score += 8.0;
            why.push(
                "No valorization infrastructure selected → landfill becomes practical fallback."
                    .to_string(),
            );
        } else {
            why.push("Valorization outlets exist → landfill should remain fallback.".to_string());
        }

        Route {
            kind: RouteKind::Landfill,
            score,
            why,
        }
    }
}

impl Default for RouteScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
