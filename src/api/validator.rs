// ==========================================
// 电弧炉钢渣利用决策工具 - 输入校验器
// ==========================================
// 职责: 化学成分输入的表单范围校验 (API 层边界,引擎不做范围检查)
// 红线: 非有限值 (NaN/∞) 任何模式都拒绝
// ==========================================

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::chemistry::ChemistryInput;

// ==========================================
// ValidationMode - 校验模式
// ==========================================

/// 校验模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationMode {
    /// 严格模式：任何超范围字段都返回错误
    Strict,
    /// 截断模式：超范围字段截断到边界后放行（记录警告）
    Clamp,
}

impl ValidationMode {
    /// 从字符串解析（宽松,大小写不敏感,未知值回退 Strict）
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "CLAMP" => ValidationMode::Clamp,
            _ => ValidationMode::Strict,
        }
    }
}

// ==========================================
// 表单范围常量
// ==========================================

/// FeO 含量范围 (%)
const FEO_RANGE: (f64, f64) = (0.0, 60.0);
/// 碱度范围 (CaO/SiO₂)
const BASICITY_RANGE: (f64, f64) = (0.5, 5.0);
/// 铬总量范围 (wt%)
const CR_RANGE: (f64, f64) = (0.0, 10.0);
/// 铅总量范围（表单刻度宽于阈值刻度,两套刻度独立维护）
const PB_RANGE: (f64, f64) = (0.0, 5000.0);
/// 锌总量范围 (wt%)
const ZN_RANGE: (f64, f64) = (0.0, 10.0);

// ==========================================
// InputValidator - 输入校验器
// ==========================================

/// 输入校验器
///
/// 职责：
/// 1. 验证五个数值字段落在表单范围内
/// 2. 拒绝非有限值（NaN / ±∞）
/// 3. 根据ValidationMode决定是返回错误还是截断放行
pub struct InputValidator {
    // 无状态校验器,不需要注入依赖
}

impl InputValidator {
    /// 创建新的InputValidator实例
    pub fn new() -> Self {
        Self {}
    }

    /// 校验化学成分输入
    ///
    /// # 参数
    /// - chemistry: 待校验的化学成分
    /// - mode: 校验模式
    ///
    /// # 返回
    /// - Ok(ChemistryInput): 校验通过（Clamp 模式下可能已截断）
    /// - Err(ApiError): 校验失败
    pub fn validate_chemistry(
        &self,
        chemistry: &ChemistryInput,
        mode: ValidationMode,
    ) -> ApiResult<ChemistryInput> {
        let mut validated = chemistry.clone();
        let mut violations = Vec::new();
        let mut non_finite = false;

        Self::check_range(
            "feo_pct",
            &mut validated.feo_pct,
            FEO_RANGE,
            mode,
            &mut violations,
            &mut non_finite,
        );
        Self::check_range(
            "basicity",
            &mut validated.basicity,
            BASICITY_RANGE,
            mode,
            &mut violations,
            &mut non_finite,
        );
        Self::check_range(
            "cr_wt_pct",
            &mut validated.cr_wt_pct,
            CR_RANGE,
            mode,
            &mut violations,
            &mut non_finite,
        );
        Self::check_range(
            "pb_wt_pct",
            &mut validated.pb_wt_pct,
            PB_RANGE,
            mode,
            &mut violations,
            &mut non_finite,
        );
        Self::check_range(
            "zn_wt_pct",
            &mut validated.zn_wt_pct,
            ZN_RANGE,
            mode,
            &mut violations,
            &mut non_finite,
        );

        // 非有限值不可截断,任何模式都拒绝
        if non_finite {
            return Err(ApiError::InputValidationError {
                reason: format!("{} field(s) not finite", violations.len()),
                violations,
            });
        }

        // 根据模式决定是否返回错误
        if !violations.is_empty() {
            match mode {
                ValidationMode::Strict => {
                    return Err(ApiError::InputValidationError {
                        reason: format!("{} field(s) out of range", violations.len()),
                        violations,
                    });
                }
                ValidationMode::Clamp => {
                    // Clamp模式下,字段已截断到边界,记录警告后放行
                    tracing::warn!("Clamp模式: {}个超范围字段已截断到边界", violations.len());
                }
            }
        }

        Ok(validated)
    }

    /// 校验单个数值字段,Clamp 模式下就地截断
    fn check_range(
        field: &'static str,
        value: &mut f64,
        range: (f64, f64),
        mode: ValidationMode,
        violations: &mut Vec<ValidationViolation>,
        non_finite: &mut bool,
    ) {
        let (min, max) = range;

        if !value.is_finite() {
            *non_finite = true;
            violations.push(ValidationViolation {
                violation_type: "NON_FINITE".to_string(),
                field: field.to_string(),
                reason: format!("value {value} is not finite"),
                details: None,
            });
            return;
        }

        if *value < min || *value > max {
            violations.push(ValidationViolation {
                violation_type: "RANGE".to_string(),
                field: field.to_string(),
                reason: format!("value {value} outside [{min}, {max}]"),
                details: Some(serde_json::json!({
                    "value": *value,
                    "min": min,
                    "max": max,
                })),
            });
            if mode == ValidationMode::Clamp {
                *value = value.clamp(min, max);
            }
        }
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}
