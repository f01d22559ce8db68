// ==========================================
// 电弧炉钢渣利用决策工具 - 建议与提示引擎
// ==========================================
// 职责: 生成资源化优先的建议措施清单与快速提示
// 输入: 化学快照 + 设施可用性 + 筛查汇总 (均为已计算值)
// 红线: 仅生成展示内容,不改变评分与排序
// ==========================================

use crate::domain::chemistry::{ChemistryInput, FacilityAvailability};
use crate::domain::route::Caution;
use crate::domain::screening::{ScreeningAssessment, ScreeningSummary};
use crate::domain::types::{CautionLevel, ExpansionRisk};

// ==========================================
// AdvisoryEngine - 建议与提示引擎
// ==========================================
pub struct AdvisoryEngine {
    // 无状态引擎,不需要注入依赖
}

impl AdvisoryEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 生成建议措施清单
    ///
    /// # 规则
    /// - 膨胀风险分档: High 两条 / Medium 一条 / Low 一条
    /// - FeO 分段: ≥25 / ≥15 / 其余
    /// - 碱度分段: ≥2.2 / ≥1.6 / 其余
    /// - 浸出合规检测提醒恒为末条
    ///
    /// # 参数
    /// - `chemistry`: 渣料化学快照
    pub fn required_actions(&self, chemistry: &ChemistryInput) -> Vec<String> {
        let mut actions = Vec::new();

        match chemistry.expansion_risk {
            ExpansionRisk::High => {
                actions.push(
                    "Aging/conditioning is strongly recommended to control expansion (free CaO/MgO)."
                        .to_string(),
                );
                actions.push(
                    "Consider stabilization/carbonation/controlled curing before reuse."
                        .to_string(),
                );
            }
            ExpansionRisk::Medium => {
                actions.push(
                    "Aging/conditioning recommended; verify volumetric stability (expansion tests)."
                        .to_string(),
                );
            }
            ExpansionRisk::Low => {
                actions.push(
                    "Low expansion risk assumed; standard QA checks still recommended.".to_string(),
                );
            }
        }

        if chemistry.feo_pct >= 25.0 {
            actions.push(
                "FeO is relatively high → metal recovery / beneficiation may be attractive (site-specific)."
                    .to_string(),
            );
        } else if chemistry.feo_pct >= 15.0 {
            actions.push(
                "Moderate FeO → check metallic content; recovery may still be worthwhile depending on plant."
                    .to_string(),
            );
        } else {
            actions.push(
                "Low FeO → metal recovery may be less attractive unless metallic Fe is significant."
                    .to_string(),
            );
        }

        if chemistry.basicity >= 2.2 {
            actions.push(
                "Higher basicity can support binder/aggregate performance but requires stability and compliance testing."
                    .to_string(),
            );
        } else if chemistry.basicity >= 1.6 {
            actions.push(
                "Moderate basicity; performance depends on processing and QA testing.".to_string(),
            );
        } else {
            actions.push(
                "Low basicity; reuse may still be possible but may require blending/conditioning for target application."
                    .to_string(),
            );
        }

        actions.push(
            "Perform EU/Germany-relevant leaching & compliance testing before unrestricted reuse (especially if Amber/Red flags)."
                .to_string(),
        );

        actions
    }

    /// 生成快速提示
    ///
    /// # 规则 (按固定顺序追加)
    /// 1. 膨胀风险 High → Warning
    /// 2. 筛查等级 High → Warning
    /// 3. 三条资源化出路全关 → Error
    /// 4. 填埋关闭 → Info
    ///
    /// # 参数
    /// - `chemistry`: 渣料化学快照
    /// - `availability`: 本地设施可用性
    /// - `screening`: 筛查汇总
    pub fn cautions(
        &self,
        chemistry: &ChemistryInput,
        availability: &FacilityAvailability,
        screening: &ScreeningSummary,
    ) -> Vec<Caution> {
        let mut cautions = Vec::new();

        if chemistry.expansion_risk == ExpansionRisk::High {
            cautions.push(Caution {
                level: CautionLevel::Warning,
                message:
                    "High expansion risk: prioritize aging/conditioning before any structural application."
                        .to_string(),
            });
        }

        if screening.compliance_risk_is_severe() {
            cautions.push(Caution {
                level: CautionLevel::Warning,
                message:
                    "High environmental screening: reuse may be restricted; expect strict testing and possible controlled-use requirements."
                        .to_string(),
            });
        }

        if !availability.has_valorization_outlet() {
            cautions.push(Caution {
                level: CautionLevel::Error,
                message: "No recycling outlets selected. Landfill may dominate if available."
                    .to_string(),
            });
        }

        if !availability.landfill_outlet {
            cautions.push(Caution {
                level: CautionLevel::Info,
                message:
                    "Landfill OFF: ensure at least one viable recycling outlet is available and compliant."
                        .to_string(),
            });
        }

        cautions
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::thresholds::ThresholdSet;
    use crate::engine::screening_core::ScreeningCore;

    fn chemistry(feo_pct: f64, basicity: f64, risk: ExpansionRisk) -> ChemistryInput {
        ChemistryInput {
            feo_pct,
            basicity,
            expansion_risk: risk,
            cr_wt_pct: 0.0,
            pb_wt_pct: 0.0,
            zn_wt_pct: 0.0,
        }
    }

    // ==========================================
    // 测试 1: 建议措施
    // ==========================================

    #[test]
    fn test_high_risk_emits_two_conditioning_actions() {
        let actions = AdvisoryEngine::new().required_actions(&chemistry(
            25.0,
            2.0,
            ExpansionRisk::High,
        ));

        // High 档 2 条 + FeO 1 条 + 碱度 1 条 + 合规 1 条 = 5
        assert_eq!(actions.len(), 5);
        assert_eq!(
            actions[0],
            "Aging/conditioning is strongly recommended to control expansion (free CaO/MgO)."
        );
        assert_eq!(
            actions[1],
            "Consider stabilization/carbonation/controlled curing before reuse."
        );
    }

    #[test]
    fn test_medium_and_low_risk_emit_single_action() {
        let engine = AdvisoryEngine::new();

        let medium = engine.required_actions(&chemistry(25.0, 2.0, ExpansionRisk::Medium));
        assert_eq!(medium.len(), 4);
        assert_eq!(
            medium[0],
            "Aging/conditioning recommended; verify volumetric stability (expansion tests)."
        );

        let low = engine.required_actions(&chemistry(25.0, 2.0, ExpansionRisk::Low));
        assert_eq!(low.len(), 4);
        assert_eq!(
            low[0],
            "Low expansion risk assumed; standard QA checks still recommended."
        );
    }

    #[test]
    fn test_compliance_action_is_always_last() {
        let engine = AdvisoryEngine::new();
        for risk in [ExpansionRisk::Low, ExpansionRisk::Medium, ExpansionRisk::High] {
            let actions = engine.required_actions(&chemistry(10.0, 1.0, risk));
            assert_eq!(
                actions.last().map(String::as_str),
                Some(
                    "Perform EU/Germany-relevant leaching & compliance testing before unrestricted reuse (especially if Amber/Red flags)."
                )
            );
        }
    }

    #[test]
    fn test_feo_band_actions() {
        let engine = AdvisoryEngine::new();

        let high = engine.required_actions(&chemistry(25.0, 2.0, ExpansionRisk::Low));
        assert!(high.iter().any(|a| a.starts_with("FeO is relatively high")));

        let mid = engine.required_actions(&chemistry(15.0, 2.0, ExpansionRisk::Low));
        assert!(mid.iter().any(|a| a.starts_with("Moderate FeO")));

        let low = engine.required_actions(&chemistry(14.9, 2.0, ExpansionRisk::Low));
        assert!(low.iter().any(|a| a.starts_with("Low FeO")));
    }

    #[test]
    fn test_basicity_band_actions() {
        let engine = AdvisoryEngine::new();

        let high = engine.required_actions(&chemistry(25.0, 2.2, ExpansionRisk::Low));
        assert!(high.iter().any(|a| a.starts_with("Higher basicity")));

        let mid = engine.required_actions(&chemistry(25.0, 1.6, ExpansionRisk::Low));
        assert!(mid.iter().any(|a| a.starts_with("Moderate basicity")));

        let low = engine.required_actions(&chemistry(25.0, 1.59, ExpansionRisk::Low));
        assert!(low.iter().any(|a| a.starts_with("Low basicity")));
    }

    // ==========================================
    // 测试 2: 快速提示
    // ==========================================

    fn screening_for(cr: f64, pb: f64, zn: f64) -> ScreeningSummary {
        let chem = ChemistryInput {
            feo_pct: 25.0,
            basicity: 2.0,
            expansion_risk: ExpansionRisk::Medium,
            cr_wt_pct: cr,
            pb_wt_pct: pb,
            zn_wt_pct: zn,
        };
        ScreeningCore::screen(&chem, &ThresholdSet::illustrative_defaults())
    }

    #[test]
    fn test_no_cautions_for_benign_setup() {
        let cautions = AdvisoryEngine::new().cautions(
            &chemistry(25.0, 2.0, ExpansionRisk::Low),
            &FacilityAvailability::default(),
            &screening_for(0.0, 0.0, 0.0),
        );
        assert!(cautions.is_empty());
    }

    #[test]
    fn test_high_risk_and_high_severity_warnings_in_order() {
        let cautions = AdvisoryEngine::new().cautions(
            &chemistry(25.0, 2.0, ExpansionRisk::High),
            &FacilityAvailability::default(),
            &screening_for(0.8, 150.0, 0.6),
        );

        assert_eq!(cautions.len(), 2);
        assert_eq!(cautions[0].level, CautionLevel::Warning);
        assert!(cautions[0].message.starts_with("High expansion risk"));
        assert_eq!(cautions[1].level, CautionLevel::Warning);
        assert!(cautions[1].message.starts_with("High environmental screening"));
    }

    #[test]
    fn test_no_recycling_outlets_is_error() {
        let availability = FacilityAvailability {
            cement_outlet: false,
            road_outlet: false,
            metal_recovery_outlet: false,
            landfill_outlet: true,
        };
        let cautions = AdvisoryEngine::new().cautions(
            &chemistry(25.0, 2.0, ExpansionRisk::Low),
            &availability,
            &screening_for(0.0, 0.0, 0.0),
        );

        assert_eq!(cautions.len(), 1);
        assert_eq!(cautions[0].level, CautionLevel::Error);
        assert_eq!(
            cautions[0].message,
            "No recycling outlets selected. Landfill may dominate if available."
        );
    }

    #[test]
    fn test_landfill_off_is_info() {
        let availability = FacilityAvailability {
            landfill_outlet: false,
            ..FacilityAvailability::default()
        };
        let cautions = AdvisoryEngine::new().cautions(
            &chemistry(25.0, 2.0, ExpansionRisk::Low),
            &availability,
            &screening_for(0.0, 0.0, 0.0),
        );

        assert_eq!(cautions.len(), 1);
        assert_eq!(cautions[0].level, CautionLevel::Info);
        assert!(cautions[0].message.starts_with("Landfill OFF"));
    }

    #[test]
    fn test_all_outlets_off_stacks_error_and_info() {
        let availability = FacilityAvailability {
            cement_outlet: false,
            road_outlet: false,
            metal_recovery_outlet: false,
            landfill_outlet: false,
        };
        let cautions = AdvisoryEngine::new().cautions(
            &chemistry(25.0, 2.0, ExpansionRisk::Low),
            &availability,
            &screening_for(0.0, 0.0, 0.0),
        );

        let levels: Vec<CautionLevel> = cautions.iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![CautionLevel::Error, CautionLevel::Info]);
    }
}
