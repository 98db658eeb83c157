use leptos::prelude::*;

use crate::core::content::ChartIcon;

/// Inline stroke icons (24x24 grid, `currentColor`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Play,
    Pause,
    BarChart,
    PieChart,
}

impl IconKind {
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Play => "play",
            IconKind::Pause => "pause",
            IconKind::BarChart => "bar-chart",
            IconKind::PieChart => "pie-chart",
        }
    }
}

impl From<ChartIcon> for IconKind {
    fn from(icon: ChartIcon) -> Self {
        match icon {
            ChartIcon::BarChart => IconKind::BarChart,
            ChartIcon::PieChart => IconKind::PieChart,
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    /// CSS classes for sizing and color
    #[prop(default = "w-6 h-6")]
    class: &'static str,
) -> impl IntoView {
    let shapes = match kind {
        IconKind::Play => view! { <polygon points="6 3 20 12 6 21 6 3" /> }.into_any(),
        IconKind::Pause => view! {
            <rect x="14" y="4" width="4" height="16" rx="1" />
            <rect x="6" y="4" width="4" height="16" rx="1" />
        }
        .into_any(),
        IconKind::BarChart => view! {
            <line x1="18" x2="18" y1="20" y2="10" />
            <line x1="12" x2="12" y1="20" y2="4" />
            <line x1="6" x2="6" y1="20" y2="14" />
        }
        .into_any(),
        IconKind::PieChart => view! {
            <path d="M21.21 15.89A10 10 0 1 1 8 2.83" />
            <path d="M22 12A10 10 0 0 0 12 2v10z" />
        }
        .into_any(),
    };

    view! {
        <svg
            class=class
            data-icon=kind.name()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shapes}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names() {
        assert_eq!(IconKind::Play.name(), "play");
        assert_eq!(IconKind::Pause.name(), "pause");
        assert_eq!(IconKind::BarChart.name(), "bar-chart");
        assert_eq!(IconKind::PieChart.name(), "pie-chart");
    }

    #[test]
    fn test_chart_icon_conversion() {
        assert_eq!(IconKind::from(ChartIcon::BarChart), IconKind::BarChart);
        assert_eq!(IconKind::from(ChartIcon::PieChart), IconKind::PieChart);
    }

    #[test]
    fn test_icon_renders_inline_svg() {
        let html = view! { <Icon kind=IconKind::Play /> }.to_html();
        assert!(html.contains("<svg"));
        assert!(html.contains("data-icon=\"play\""));
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains("<polygon"));
    }
}
