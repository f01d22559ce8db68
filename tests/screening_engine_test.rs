// ==========================================
// 环境筛查集成测试
// ==========================================
// 职责: 验证公开 API 路径下的旗级判定、扣减求和、等级分档
// ==========================================


use eaf_slag_dst::config::{MetalThresholds, ThresholdSet};
use eaf_slag_dst::domain::screening::ScreeningAssessment;
use eaf_slag_dst::domain::types::{Flag, SeverityTier, TraceMetal};
use eaf_slag_dst::engine::ScreeningCore;
use test_helpers::{clean_chemistry, default_chemistry};

// ==========================================
// 测试 1: 断点边界取等
// ==========================================

#[test]
fn test_green_boundary_inclusive() {
    let mut chemistry = clean_chemistry();
    chemistry.cr_wt_pct = 0.5;

    let summary = ScreeningCore::screen(&chemistry, &ThresholdSet::illustrative_defaults());
    assert_eq!(summary.cr.flag, Flag::Green);
    assert_eq!(summary.cr.penalty, 0);
}

#[test]
fn test_just_above_green_is_amber() {
    let mut chemistry = clean_chemistry();
    chemistry.cr_wt_pct = 0.5001;

    let summary = ScreeningCore::screen(&chemistry, &ThresholdSet::illustrative_defaults());
    assert_eq!(summary.cr.flag, Flag::Amber);
    assert_eq!(summary.cr.penalty, 2);
}

#[test]
fn test_amber_boundary_inclusive() {
    let mut chemistry = clean_chemistry();
    chemistry.zn_wt_pct = 1.5;

    let summary = ScreeningCore::screen(&chemistry, &ThresholdSet::illustrative_defaults());
    assert_eq!(summary.zn.flag, Flag::Amber);
}

#[test]
fn test_just_above_amber_is_red() {
    let mut chemistry = clean_chemistry();
    chemistry.zn_wt_pct = 1.5001;

    let summary = ScreeningCore::screen(&chemistry, &ThresholdSet::illustrative_defaults());
    assert_eq!(summary.zn.flag, Flag::Red);
    assert_eq!(summary.zn.penalty, 6);
}

// ==========================================
// 测试 2: 示例默认输入
// ==========================================

#[test]
fn test_default_inputs_screen_high() {
    // Cr 0.8 → Amber(2), Pb 150 → Red(6), Zn 0.6 → Amber(2)
    let summary =
        ScreeningCore::screen(&default_chemistry(), &ThresholdSet::illustrative_defaults());

    assert_eq!(summary.cr.flag, Flag::Amber);
    assert_eq!(summary.pb.flag, Flag::Red);
    assert_eq!(summary.zn.flag, Flag::Amber);
    assert_eq!(summary.penalty_sum, 10);
    assert_eq!(summary.severity, SeverityTier::High);
}

#[test]
fn test_clean_slag_screens_low() {
    let summary =
        ScreeningCore::screen(&clean_chemistry(), &ThresholdSet::illustrative_defaults());

    assert_eq!(summary.penalty_sum, 0);
    assert_eq!(summary.severity, SeverityTier::Low);
    assert_eq!(summary.severity_badge(), "🟢 Low");
}

#[test]
fn test_metal_flags_preserve_fixed_order() {
    let summary =
        ScreeningCore::screen(&default_chemistry(), &ThresholdSet::illustrative_defaults());

    let symbols: Vec<&str> = summary
        .metal_flags()
        .iter()
        .map(|f| f.metal.symbol())
        .collect();
    assert_eq!(symbols, vec!["Cr", "Pb", "Zn"]);
}

// ==========================================
// 测试 3: 派生判定接口
// ==========================================

#[test]
fn test_assessment_predicates_on_default_inputs() {
    let summary =
        ScreeningCore::screen(&default_chemistry(), &ThresholdSet::illustrative_defaults());

    // Pb Red 为最差旗级
    assert_eq!(summary.worst_flag(), Flag::Red);
    assert!(summary.has_red_flag());
    assert!(summary.compliance_risk_is_severe());
    assert_eq!(summary.flag_for(TraceMetal::Pb).penalty, 6);
    assert_eq!(summary.flag_for(TraceMetal::Cr).flag, Flag::Amber);
}

#[test]
fn test_assessment_predicates_on_clean_slag() {
    let summary =
        ScreeningCore::screen(&clean_chemistry(), &ThresholdSet::illustrative_defaults());

    assert_eq!(summary.worst_flag(), Flag::Green);
    assert!(!summary.has_red_flag());
    assert!(!summary.compliance_risk_is_severe());
    assert_eq!(summary.flag_for(TraceMetal::Zn).penalty, 0);
}

// ==========================================
// 测试 4: 自定义断点改写旗级
// ==========================================

#[test]
fn test_custom_thresholds_relax_flags() {
    // 放宽断点后,示例默认输入变为全 Green
    let thresholds = ThresholdSet {
        cr: MetalThresholds::new(1.0, 2.0),
        pb: MetalThresholds::new(200.0, 400.0),
        zn: MetalThresholds::new(1.0, 2.0),
    };
    let summary = ScreeningCore::screen(&default_chemistry(), &thresholds);

    assert_eq!(summary.cr.flag, Flag::Green);
    assert_eq!(summary.pb.flag, Flag::Green);
    assert_eq!(summary.zn.flag, Flag::Green);
    assert_eq!(summary.severity, SeverityTier::Low);
}

#[test]
fn test_custom_thresholds_tighten_flags() {
    // 收紧断点后,干净渣料之外的任何痕量都判 Red
    let thresholds = ThresholdSet {
        cr: MetalThresholds::new(0.1, 0.2),
        pb: MetalThresholds::new(0.001, 0.002),
        zn: MetalThresholds::new(0.1, 0.2),
    };
    let summary = ScreeningCore::screen(&default_chemistry(), &thresholds);

    assert_eq!(summary.cr.flag, Flag::Red);
    assert_eq!(summary.pb.flag, Flag::Red);
    assert_eq!(summary.zn.flag, Flag::Red);
    assert_eq!(summary.penalty_sum, 18);
    assert_eq!(summary.severity, SeverityTier::High);
}
