pub mod pages;
pub mod seats;

use handlebars::{Handlebars, RenderError, TemplateError};

use crate::services::SeatPlan;
use pages::{ChartPage, PrintPage};

const CHART_TEMPLATE: &str = "chart";
const PRINT_TEMPLATE: &str = "print";

/// Template registry for the HTML pages. Templates are compiled into the binary.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(CHART_TEMPLATE, include_str!("../../templates/chart.hbs"))?;
        registry.register_template_string(PRINT_TEMPLATE, include_str!("../../templates/print.hbs"))?;
        Ok(Self { registry })
    }

    pub fn chart(&self, plan: &SeatPlan) -> Result<String, RenderError> {
        self.registry.render(CHART_TEMPLATE, &ChartPage::build(plan))
    }

    pub fn print(&self, plan: &SeatPlan) -> Result<String, RenderError> {
        self.registry.render(PRINT_TEMPLATE, &PrintPage::build(plan))
    }
}
