// ==========================================
// 电弧炉钢渣利用决策工具 - 路径排名引擎
// ==========================================
// 职责: 按得分降序稳定排序并打序位标签
// 红线: 同分保持评分引擎的生成顺序 (道路 → 水泥 → 金属回收 → 填埋)
// ==========================================

use crate::domain::route::{RankedRoute, Route};
use crate::domain::types::RankTag;

// ==========================================
// RouteRanker - 路径排名引擎
// ==========================================
pub struct RouteRanker {
    // 无状态引擎,不需要注入依赖
}

impl RouteRanker {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 排名路径列表
    ///
    /// # 规则
    /// - 得分降序 (total_cmp,NaN 也有全序)
    /// - Vec 稳定排序: 同分保持传入顺序
    /// - rank 从 1 起; 标签按下标 0/1/其余 → Recommended/Alternative/Other
    ///
    /// # 参数
    /// - `routes`: 评分引擎输出的路径列表 (生成顺序)
    ///
    /// # 返回
    /// 降序排名的路径列表
    pub fn rank(&self, mut routes: Vec<Route>) -> Vec<RankedRoute> {
        // 分数高者优先
        routes.sort_by(|a, b| b.score.total_cmp(&a.score));

        routes
            .into_iter()
            .enumerate()
            .map(|(index, route)| RankedRoute {
                rank: index + 1,
                tag: RankTag::from_index(index),
                route,
            })
            .collect()
    }
}

impl Default for RouteRanker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RouteKind;

    fn route(kind: RouteKind, score: f64) -> Route {
        Route {
            kind,
            score,
            why: vec![],
        }
    }

    // ==========================================
    // 测试 1: 降序与序位
    // ==========================================

    #[test]
    fn test_rank_sorts_descending() {
        let routes = vec![
            route(RouteKind::RoadConstruction, -3.0),
            route(RouteKind::CementBinder, 0.5),
            route(RouteKind::MetalRecovery, 8.0),
            route(RouteKind::Landfill, 6.0),
        ];

        let ranked = RouteRanker::new().rank(routes);

        assert_eq!(ranked[0].route.kind, RouteKind::MetalRecovery);
        assert_eq!(ranked[1].route.kind, RouteKind::Landfill);
        assert_eq!(ranked[2].route.kind, RouteKind::CementBinder);
        assert_eq!(ranked[3].route.kind, RouteKind::RoadConstruction);

        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_rank_assigns_tags_by_index() {
        let routes = vec![
            route(RouteKind::RoadConstruction, 4.0),
            route(RouteKind::CementBinder, 3.0),
            route(RouteKind::MetalRecovery, 2.0),
            route(RouteKind::Landfill, 1.0),
        ];

        let ranked = RouteRanker::new().rank(routes);

        assert_eq!(ranked[0].tag, RankTag::Recommended);
        assert_eq!(ranked[1].tag, RankTag::Alternative);
        assert_eq!(ranked[2].tag, RankTag::Other);
        assert_eq!(ranked[3].tag, RankTag::Other);
        assert_eq!(ranked[0].tag.label(), "✅ Recommended");
        assert_eq!(ranked[2].tag.label(), "⚪ Other");
    }

    // ==========================================
    // 测试 2: 同分稳定性
    // ==========================================

    #[test]
    fn test_rank_preserves_insertion_order_on_ties() {
        // 道路与金属回收同分: 道路先生成,保持在前
        let routes = vec![
            route(RouteKind::RoadConstruction, -4.0),
            route(RouteKind::CementBinder, -3.0),
            route(RouteKind::MetalRecovery, -4.0),
            route(RouteKind::Landfill, 5.0),
        ];

        let ranked = RouteRanker::new().rank(routes);

        assert_eq!(ranked[0].route.kind, RouteKind::Landfill);
        assert_eq!(ranked[1].route.kind, RouteKind::CementBinder);
        assert_eq!(ranked[2].route.kind, RouteKind::RoadConstruction);
        assert_eq!(ranked[3].route.kind, RouteKind::MetalRecovery);
    }

    #[test]
    fn test_rank_all_equal_scores_keeps_generation_order() {
        let routes = vec![
            route(RouteKind::RoadConstruction, 1.0),
            route(RouteKind::CementBinder, 1.0),
            route(RouteKind::MetalRecovery, 1.0),
            route(RouteKind::Landfill, 1.0),
        ];

        let ranked = RouteRanker::new().rank(routes);

        let kinds: Vec<RouteKind> = ranked.iter().map(|r| r.route.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RouteKind::RoadConstruction,
                RouteKind::CementBinder,
                RouteKind::MetalRecovery,
                RouteKind::Landfill,
            ]
        );
    }

    #[test]
    fn test_top_score_not_below_any_other() {
        let routes = vec![
            route(RouteKind::RoadConstruction, 8.0),
            route(RouteKind::CementBinder, 9.0),
            route(RouteKind::MetalRecovery, 10.0),
            route(RouteKind::Landfill, -3.0),
        ];

        let ranked = RouteRanker::new().rank(routes);
        let top = ranked[0].route.score;
        assert!(ranked.iter().all(|r| top >= r.route.score));
    }
}
