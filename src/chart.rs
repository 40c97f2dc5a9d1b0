//! The income vs. expense bar chart.
//!
//! The chart is described as an ECharts option object generated with
//! `charming` and embedded in the container's `data-chart-options`
//! attribute. `static/app.js` disposes any ECharts instance on the container
//! before initialising a new one from the attribute.

use charming::{
    Chart,
    component::{Axis, Grid},
    datatype::DataPointItem,
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    series::Bar,
};
use maud::{Markup, html};

use crate::html::Placement;

/// The ID of the element the chart is drawn into.
pub const CHART_ID: &str = "finance-chart";
/// The ID of the section wrapping the chart, used for out-of-band swaps.
pub const CHART_SECTION_ID: &str = "chart-section";

const INCOME_COLOUR: &str = "#43a047";
const EXPENSE_COLOUR: &str = "#e53935";

/// The chart that is currently on the page.
struct LiveChart {
    generation: u64,
    options: String,
}

impl Drop for LiveChart {
    fn drop(&mut self) {
        tracing::debug!("Disposed finance chart #{}", self.generation);
    }
}

/// Owns the single live chart and replaces it on every render.
#[derive(Default)]
pub struct ChartAdapter {
    live: Option<LiveChart>,
    generation: u64,
}

impl std::fmt::Debug for ChartAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartAdapter")
            .field("live_generation", &self.live_generation())
            .finish()
    }
}

impl ChartAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispose the current chart and render a new one for the two totals.
    ///
    /// Negative inputs are clamped to zero.
    pub fn render(&mut self, income: f64, expense: f64, placement: Placement) -> Markup {
        self.dispose();

        self.generation += 1;
        let options = finance_chart(income.max(0.0), expense.max(0.0)).to_string();
        let markup = chart_view(self.generation, &options, placement);

        self.live = Some(LiveChart {
            generation: self.generation,
            options,
        });
        tracing::debug!("Created finance chart #{}", self.generation);

        markup
    }

    /// Drop the current chart, if any.
    pub fn dispose(&mut self) {
        self.live.take();
    }

    /// The generation of the chart on the page, `None` before the first render.
    pub fn live_generation(&self) -> Option<u64> {
        self.live.as_ref().map(|live| live.generation)
    }

    /// The ECharts options of the chart on the page.
    pub fn live_options(&self) -> Option<&str> {
        self.live.as_ref().map(|live| live.options.as_str())
    }
}

fn finance_chart(income: f64, expense: f64) -> Chart {
    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(vec!["Income", "Expense"]),
        )
        // Value axes start at zero unless `scale` is set.
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(Bar::new().name("Finance Overview").data(vec![
            DataPointItem::new(income).item_style(ItemStyle::new().color(INCOME_COLOUR)),
            DataPointItem::new(expense).item_style(ItemStyle::new().color(EXPENSE_COLOUR)),
        ]))
}

fn chart_view(generation: u64, options: &str, placement: Placement) -> Markup {
    html!(
        section
            id=(CHART_SECTION_ID)
            hx-swap-oob=[placement.swap_oob()]
            class="w-full max-w-3xl mx-auto mb-4"
        {
            div
                id=(CHART_ID)
                class="min-h-[300px] rounded bg-white dark:bg-gray-100"
                data-chart-generation=(generation)
                data-chart-options=(options)
            {}
        }
    )
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        chart::{CHART_ID, ChartAdapter},
        html::Placement,
    };

    fn chart_options(markup: &str) -> String {
        let html = Html::parse_fragment(markup);
        let selector = Selector::parse(&format!("#{CHART_ID}")).unwrap();
        let charts = html.select(&selector).collect::<Vec<_>>();
        assert_eq!(charts.len(), 1, "want 1 chart container, got {}", charts.len());

        charts[0]
            .value()
            .attr("data-chart-options")
            .expect("chart options missing")
            .to_owned()
    }

    #[test]
    fn render_replaces_the_live_chart() {
        let mut adapter = ChartAdapter::new();
        assert_eq!(adapter.live_generation(), None);

        adapter.render(100.0, 40.0, Placement::Inline);
        adapter.render(100.0, 44.5, Placement::OutOfBand);

        assert_eq!(adapter.live_generation(), Some(2));
    }

    #[test]
    fn dispose_clears_the_live_chart() {
        let mut adapter = ChartAdapter::new();
        adapter.render(1.0, 2.0, Placement::Inline);

        adapter.dispose();

        assert_eq!(adapter.live_generation(), None);
        assert_eq!(adapter.live_options(), None);
    }

    #[test]
    fn options_describe_two_coloured_bars() {
        let mut adapter = ChartAdapter::new();

        let markup = adapter.render(100.0, 40.0, Placement::Inline).into_string();
        let options = chart_options(&markup);

        serde_json::from_str::<serde_json::Value>(&options).expect("options should be JSON");
        for want in ["Income", "Expense", "Finance Overview", "#43a047", "#e53935"] {
            assert!(options.contains(want), "want {want} in chart options");
        }
        assert_eq!(adapter.live_options(), Some(options.as_str()));
    }

    #[test]
    fn chart_container_carries_generation() {
        let mut adapter = ChartAdapter::new();
        adapter.render(0.0, 0.0, Placement::Inline);

        let markup = adapter.render(5.0, 0.0, Placement::OutOfBand).into_string();
        let html = Html::parse_fragment(&markup);
        let chart = html
            .select(&Selector::parse(&format!("#{CHART_ID}")).unwrap())
            .next()
            .unwrap();

        assert_eq!(chart.value().attr("data-chart-generation"), Some("2"));
        let section = html
            .select(&Selector::parse("#chart-section").unwrap())
            .next()
            .unwrap();
        assert_eq!(section.value().attr("hx-swap-oob"), Some("true"));
    }
}
