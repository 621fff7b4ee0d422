//! Style helpers so the compliance colors stay consistent across pages.
//!
//! All color decisions derive from `ComplianceStatus` / `PoolVerdict` here;
//! the engine itself never emits presentation attributes.

use crate::domain::{ComplianceStatus, PoolVerdict};

// ============================================
// STATUS-DERIVED STYLES
// ============================================

pub fn status_badge(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Deficit => "bg-rose-500/10 text-rose-300 border-rose-500/40",
        ComplianceStatus::Surplus => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
    }
}

pub fn balance_text(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Deficit => "font-semibold tabular-nums text-rose-400",
        ComplianceStatus::Surplus => "font-semibold tabular-nums text-emerald-400",
    }
}

pub fn intensity_bar(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::Deficit => "h-full rounded-full bg-rose-500",
        ComplianceStatus::Surplus => "h-full rounded-full bg-emerald-500",
    }
}

pub fn verdict_panel(verdict: PoolVerdict) -> &'static str {
    match verdict {
        PoolVerdict::Compliant => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        PoolVerdict::NonCompliant => "border-rose-500/40 bg-rose-500/10 text-rose-200",
    }
}

pub fn verdict_badge(verdict: PoolVerdict) -> &'static str {
    match verdict {
        PoolVerdict::Compliant => "border-emerald-400 text-emerald-300",
        PoolVerdict::NonCompliant => "border-rose-400 text-rose-300",
    }
}

// ============================================
// FIXED STYLES
// ============================================

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400";

pub const BTN_PAGER: &str = "rounded-lg border border-slate-700 px-3 py-1 text-sm text-slate-300 \
     hover:bg-slate-800 disabled:cursor-not-allowed disabled:opacity-40";

pub const INPUT: &str = "rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm \
     text-slate-100 focus:border-indigo-500 focus:outline-none";

pub const SELECT: &str = "rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm \
     text-slate-100 focus:border-indigo-500 focus:outline-none cursor-pointer";

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";

pub const TABLE_CONTAINER: &str =
    "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden";

pub const TABLE_HEADER: &str =
    "border-b border-slate-800 bg-slate-900/60 text-xs uppercase text-slate-500";

pub const TABLE_DIVIDER: &str = "divide-y divide-slate-800";

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

pub const TEXT_MUTED: &str = "text-slate-500";
