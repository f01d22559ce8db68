// ==========================================
// 电弧炉钢渣利用决策工具 - 路径评分领域模型
// ==========================================
// 依据: 循环经济偏好下的四路径排序 (道路/水泥/金属回收/填埋)
// 红线: 评分是启发式排序依据,不是工程判定
// ==========================================

use crate::domain::screening::ScreeningSummary;
use crate::domain::types::{CautionLevel, RankTag, RouteKind};
use serde::{Deserialize, Serialize};

// ==========================================
// Route - 单路径评分结果
// ==========================================
// 用途: 评分引擎输出,按固定顺序生成
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub kind: RouteKind,  // 路径类型
    pub score: f64,       // 启发式得分 (可为负)
    pub why: Vec<String>, // 关键理由 (按生成顺序,可解释性)
}

impl Route {
    /// 面向用户的路径全称
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// 路径固有优势
    pub fn pros(&self) -> &'static [&'static str] {
        self.kind.pros()
    }

    /// 路径固有短板
    pub fn cons(&self) -> &'static [&'static str] {
        self.kind.cons()
    }
}

// ==========================================
// RankedRoute - 排序后的路径
// ==========================================
// 用途: 排名引擎输出; rank 从 1 起
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRoute {
    pub rank: usize,  // 排名 (1 起)
    pub tag: RankTag, // 序位标签
    pub route: Route, // 路径评分结果
}

// ==========================================
// Caution - 快速提示
// ==========================================
// 用途: 展示层提示,不影响评分与排序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caution {
    pub level: CautionLevel, // 提示等级
    pub message: String,     // 提示文案
}

// ==========================================
// EvaluationOutcome - 单次评估结果
// ==========================================
// 红线: 纯计算产物,不含 ID/时间戳,同输入必同输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub screening: ScreeningSummary,   // 筛查汇总
    pub routes: Vec<RankedRoute>,      // 降序排名的四条路径
    pub required_actions: Vec<String>, // 建议措施 (资源化优先)
    pub cautions: Vec<Caution>,        // 快速提示
}

impl EvaluationOutcome {
    /// 首选路径 (排名第一)
    pub fn recommended(&self) -> Option<&RankedRoute> {
        self.routes.first()
    }

    /// 取指定排名的路径 (rank 从 1 起)
    pub fn route_at_rank(&self, rank: usize) -> Option<&RankedRoute> {
        self.routes.iter().find(|r| r.rank == rank)
    }
}
