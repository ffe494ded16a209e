//! Deal pipeline table.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table, TableState},
    Frame,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DashboardComponent, RenderContext};
use crate::formatting::format_currency;

/// Investment stage a deal has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealStage {
    InitialContact,
    Proposal,
    Negotiation,
    DueDiligence,
    Closed,
}

impl DealStage {
    /// Every stage in pipeline order
    pub const ALL: [DealStage; 5] = [
        DealStage::InitialContact,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::DueDiligence,
        DealStage::Closed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DealStage::InitialContact => "Initial Contact",
            DealStage::Proposal => "Proposal",
            DealStage::Negotiation => "Negotiation",
            DealStage::DueDiligence => "Due Diligence",
            DealStage::Closed => "Closed",
        }
    }
}

impl fmt::Display for DealStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A prospective investment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: u32,
    pub company: String,
    pub stage: DealStage,
    /// Deal size in whole dollars
    pub value: u64,
    pub sector: String,
}

impl Deal {
    fn new(id: u32, company: &str, stage: DealStage, value: u64, sector: &str) -> Self {
        Self {
            id,
            company: company.to_string(),
            stage,
            value,
            sector: sector.to_string(),
        }
    }
}

/// Seed data shown in the pipeline table
pub fn seed_deals() -> Vec<Deal> {
    vec![
        Deal::new(1, "EcoTech Solutions", DealStage::InitialContact, 5_000_000, "Energy Transition"),
        Deal::new(2, "CircularWare", DealStage::Proposal, 3_000_000, "Circular Economy"),
        Deal::new(
            3,
            "GreenBuild Systems",
            DealStage::Negotiation,
            7_000_000,
            "Decarbonizing Built Environment",
        ),
        Deal::new(4, "SustainaTour", DealStage::DueDiligence, 4_000_000, "Sustainable Tourism"),
    ]
}

const HEADERS: [&str; 4] = ["Company", "Stage", "Value", "Sector"];

/// Table of deals with a movable row highlight
pub struct DealPipelineComponent {
    deals: Vec<Deal>,
    state: TableState,
}

impl DealPipelineComponent {
    pub fn new() -> Self {
        Self::with_deals(seed_deals())
    }

    pub fn with_deals(deals: Vec<Deal>) -> Self {
        Self {
            deals,
            state: TableState::default(),
        }
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Cell text for each deal, in column order
    pub fn rows(&self) -> Vec<[String; 4]> {
        self.deals
            .iter()
            .map(|deal| {
                [
                    deal.company.clone(),
                    deal.stage.to_string(),
                    format_currency(deal.value),
                    deal.sector.clone(),
                ]
            })
            .collect()
    }

    fn select_next(&mut self) {
        if self.deals.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(i) => (i + 1).min(self.deals.len() - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn select_prev(&mut self) {
        if self.deals.is_empty() {
            return;
        }
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }
}

impl Default for DealPipelineComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardComponent for DealPipelineComponent {
    fn id(&self) -> &'static str {
        "dealPipeline"
    }

    fn title(&self) -> &'static str {
        "Deal Pipeline"
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.state.selected();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            _ => return false,
        }
        before != self.state.selected()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        let theme = &ctx.theme;

        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(theme.header_style());

        let rows: Vec<Row> = self
            .rows()
            .into_iter()
            .map(|cells| Row::new(cells.into_iter().map(Cell::from)))
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(25),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(35),
            ],
        )
        .header(header)
        .block(theme.panel(self.title()))
        .row_highlight_style(theme.highlight_style())
        .highlight_symbol("▸ ");

        frame.render_stateful_widget(table, area, &mut self.state);
    }
}
