// ==========================================
// 电弧炉钢渣利用决策工具 - 文本报告渲染
// ==========================================
// 职责: 将评估报告渲染为终端可读的文本
// 红线: 只做展示,不做任何业务计算; 小节标签走 i18n,业务文案按报告原样输出
// ==========================================

use crate::api::evaluation_api::{EvaluationReport, RouteView};
use crate::i18n::{t, t_with_args};

/// 小节分隔线
const DIVIDER: &str = "------------------------------------------------------------";

// ==========================================
// ReportRenderer - 文本报告渲染器
// ==========================================

/// 文本报告渲染器
///
/// 布局顺序: 抬头 → 筛查汇总 → 路径排名 → 逐路径理由 → 建议措施 → 提示 → 来源链接
pub struct ReportRenderer {
    // 无状态渲染器,不需要注入依赖
}

impl ReportRenderer {
    /// 创建新的ReportRenderer实例
    pub fn new() -> Self {
        Self {}
    }

    /// 渲染完整报告
    ///
    /// # 参数
    /// - report: 评估报告
    ///
    /// # 返回
    /// - 终端可读的多行文本
    pub fn render(&self, report: &EvaluationReport) -> String {
        let mut out = String::new();

        self.render_header(&mut out, report);
        self.render_screening(&mut out, report);
        self.render_ranking(&mut out, report);
        self.render_routes(&mut out, report);
        self.render_actions(&mut out, report);
        self.render_cautions(&mut out, report);
        self.render_links(&mut out, report);

        out
    }

    // ==========================================
    // 各小节渲染
    // ==========================================

    fn render_header(&self, out: &mut String, report: &EvaluationReport) {
        out.push_str(&t("report.title"));
        out.push('\n');
        out.push_str(DIVIDER);
        out.push('\n');
        out.push_str(&t("report.intro"));
        out.push('\n');
        out.push_str(&t("report.intro_note"));
        out.push('\n');
        out.push_str(&t_with_args(
            "report.generated",
            &[
                ("id", &report.report_id),
                ("ts", &report.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()),
            ],
        ));
        out.push_str("\n\n");
    }

    fn render_screening(&self, out: &mut String, report: &EvaluationReport) {
        out.push_str(&t("report.screening_heading"));
        out.push('\n');
        for metal in &report.screening.metals {
            out.push_str(&format!("{}: {}\n", metal.metal, metal.label));
        }
        out.push_str(&format!(
            "{}: {}\n",
            t("report.overall_screening"),
            report.screening.severity_badge
        ));
        out.push_str(&t("report.screening_caption"));
        out.push_str("\n\n");
    }

    fn render_ranking(&self, out: &mut String, report: &EvaluationReport) {
        out.push_str(&t("report.ranking_heading"));
        out.push('\n');
        out.push_str(&format!(
            "{}: {}\n",
            t("report.recommended"),
            report.ranking.recommended
        ));
        out.push_str(&format!(
            "{}: {}\n",
            t("report.alternative"),
            report.ranking.alternative
        ));
        out.push_str(&format!(
            "{}: {}\n",
            t("report.third_option"),
            report.ranking.third_option
        ));
        out.push('\n');
    }

    fn render_routes(&self, out: &mut String, report: &EvaluationReport) {
        out.push_str(&t("report.reasoning_heading"));
        out.push('\n');
        for route in &report.routes {
            self.render_route(out, route);
        }
    }

    fn render_route(&self, out: &mut String, route: &RouteView) {
        // 序位标签 + 全称 + 一位小数得分 (标签与得分之间两个空格)
        out.push_str(&format!(
            "{}: {}  (Score: {:.1})\n",
            route.tag, route.title, route.score
        ));

        out.push_str(&t("report.key_reasons"));
        out.push('\n');
        for why in &route.why {
            out.push_str(&format!("- {why}\n"));
        }

        out.push_str(&t("report.pros"));
        out.push('\n');
        for pro in &route.pros {
            out.push_str(&format!("- {pro}\n"));
        }

        out.push_str(&t("report.cons"));
        out.push('\n');
        for con in &route.cons {
            out.push_str(&format!("- {con}\n"));
        }

        out.push('\n');
    }

    fn render_actions(&self, out: &mut String, report: &EvaluationReport) {
        out.push_str(&t("report.actions_heading"));
        out.push('\n');
        out.push_str(&t("report.actions_caption"));
        out.push('\n');
        for action in &report.required_actions {
            out.push_str(&format!("- {action}\n"));
        }
        out.push('\n');
    }

    fn render_cautions(&self, out: &mut String, report: &EvaluationReport) {
        out.push_str(&t("report.cautions_heading"));
        out.push('\n');
        for caution in &report.cautions {
            out.push_str(&format!("[{}] {}\n", caution.level, caution.message));
        }
        out.push('\n');
    }

    fn render_links(&self, out: &mut String, report: &EvaluationReport) {
        out.push_str(&t("report.links_heading"));
        out.push('\n');
        if report.links.is_empty() {
            out.push_str(&t("report.links_empty"));
            out.push('\n');
            return;
        }
        if let Some(url) = &report.links.ersatzbaustoffv {
            out.push_str(&format!(
                "- {}\n",
                t_with_args("report.link_ersatzbaustoffv", &[("url", url)])
            ));
        }
        if let Some(url) = &report.links.depv {
            out.push_str(&format!(
                "- {}\n",
                t_with_args("report.link_depv", &[("url", url)])
            ));
        }
        if let Some(url) = &report.links.state_guidance {
            out.push_str(&format!(
                "- {}\n",
                t_with_args("report.link_state", &[("url", url)])
            ));
        }
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}
