// ==========================================
// 电弧炉钢渣利用决策工具 - API层错误类型
// ==========================================
// 职责: 定义 API 层错误类型,转换配置层错误为用户可读的错误消息
// 红线: 所有错误信息必须包含显式原因 (可解释性)
// ==========================================

use crate::config::error::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 阈值配置错误
    // ==========================================
    #[error("threshold configuration rejected: {0}")]
    ThresholdConfiguration(#[from] ConfigError),

    // ==========================================
    // 输入校验错误
    // ==========================================
    /// 输入范围校验失败 (带逐项明细)
    #[error("input validation failed: {reason}")]
    InputValidationError {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    // ==========================================
    // 请求解析错误
    // ==========================================
    #[error("request parse failed: {0}")]
    RequestParseError(#[from] serde_json::Error),

    #[error("request file read failed: {0}")]
    RequestReadError(#[from] std::io::Error),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ValidationViolation {
    /// 违规类型（RANGE / NON_FINITE / THRESHOLDS_MISSING）
    pub violation_type: String,
    /// 违规字段
    pub field: String,
    /// 违规原因
    pub reason: String,
    /// 额外信息（可选）
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::TraceMetal;

    #[test]
    fn test_config_error_conversion() {
        let config_err = ConfigError::InvalidThresholdConfiguration {
            metal: TraceMetal::Cr,
            green_max: 2.0,
            amber_max: 1.0,
        };
        let api_err: ApiError = config_err.into();

        match api_err {
            ApiError::ThresholdConfiguration(inner) => {
                let msg = inner.to_string();
                assert!(msg.contains("CR"));
                assert!(msg.contains("green_max=2"));
            }
            _ => panic!("Expected ThresholdConfiguration"),
        }
    }

    #[test]
    fn test_validation_error_reports_reason() {
        let err = ApiError::InputValidationError {
            reason: "2 field(s) out of range".to_string(),
            violations: vec![ValidationViolation {
                violation_type: "RANGE".to_string(),
                field: "feo_pct".to_string(),
                reason: "value 75 outside [0, 60]".to_string(),
                details: Some(serde_json::json!({ "min": 0.0, "max": 60.0 })),
            }],
        };

        assert!(err.to_string().contains("2 field(s) out of range"));
    }

    #[test]
    fn test_anyhow_passthrough_is_transparent() {
        let api_err: ApiError = anyhow::anyhow!("downstream failure").into();
        assert_eq!(api_err.to_string(), "downstream failure");
    }
}
