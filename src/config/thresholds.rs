// ==========================================
// 电弧炉钢渣利用决策工具 - 筛查阈值配置
// ==========================================
// 依据: ErsatzbaustoffV / DepV / 州级指南的断点录入惯例
// 红线: 默认断点仅为示例,不是法定限值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::TraceMetal;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// MetalThresholds - 单金属断点对
// ==========================================
// 语义: 实测值 ≤ green_max → Green; ≤ amber_max → Amber; 其余 → Red
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetalThresholds {
    pub green_max: f64, // Green 断点 (wt%)
    pub amber_max: f64, // Amber 断点 (wt%)
}

impl MetalThresholds {
    pub fn new(green_max: f64, amber_max: f64) -> Self {
        Self {
            green_max,
            amber_max,
        }
    }

    /// 校验断点对
    ///
    /// # 规则
    /// - 断点非负
    /// - green_max ≤ amber_max (NaN 会被顺序检查拒绝)
    pub fn validate(&self, metal: TraceMetal) -> ConfigResult<()> {
        if self.green_max < 0.0 {
            return Err(ConfigError::NegativeThreshold {
                metal,
                field: "green_max",
                value: self.green_max,
            });
        }
        if self.amber_max < 0.0 {
            return Err(ConfigError::NegativeThreshold {
                metal,
                field: "amber_max",
                value: self.amber_max,
            });
        }
        if !(self.green_max <= self.amber_max) {
            return Err(ConfigError::InvalidThresholdConfiguration {
                metal,
                green_max: self.green_max,
                amber_max: self.amber_max,
            });
        }

        Ok(())
    }
}

// ==========================================
// ThresholdSet - 三金属断点集合
// ==========================================
// 用途: 引擎层只读输入,示例默认或自定义录入
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub cr: MetalThresholds, // 铬断点
    pub pb: MetalThresholds, // 铅断点
    pub zn: MetalThresholds, // 锌断点
}

impl ThresholdSet {
    /// 示例默认断点 (教学/演示用,非法定限值)
    pub fn illustrative_defaults() -> Self {
        Self {
            cr: MetalThresholds::new(0.5, 1.5),
            pb: MetalThresholds::new(0.01, 0.03),
            zn: MetalThresholds::new(0.5, 1.5),
        }
    }

    /// 取指定金属的断点对
    pub fn for_metal(&self, metal: TraceMetal) -> &MetalThresholds {
        match metal {
            TraceMetal::Cr => &self.cr,
            TraceMetal::Pb => &self.pb,
            TraceMetal::Zn => &self.zn,
        }
    }

    /// 校验三组断点
    pub fn validate(&self) -> ConfigResult<()> {
        self.cr.validate(TraceMetal::Cr)?;
        self.pb.validate(TraceMetal::Pb)?;
        self.zn.validate(TraceMetal::Zn)?;
        Ok(())
    }

    /// 从 JSON 文件加载断点集合
    ///
    /// # 参数
    /// - path: 阈值文件路径
    ///
    /// # 返回
    /// - Ok(ThresholdSet): 已通过校验的断点集合
    /// - Err: 读取/解析/校验失败
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let set: ThresholdSet = serde_json::from_str(&raw)?;
        set.validate()?;

        tracing::info!(path = %path.display(), "阈值文件加载成功");
        Ok(set)
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self::illustrative_defaults()
    }
}
