use crate::models::{Entry, FlashbackItem, TimelinePoint};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};
use indexmap::IndexMap;
use std::{collections::BTreeMap, fmt, str::FromStr};
use tracing::debug;

const MONTHS_SHOWN: usize = 12;
const UNKNOWN_MOOD: &str = "❓";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineMode {
    Last7,
    Last14,
    Monthly,
}

impl FromStr for TimelineMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "last7" => Ok(Self::Last7),
            "last14" => Ok(Self::Last14),
            "monthly" => Ok(Self::Monthly),
            other => Err(format!("unknown timeline mode '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodFilter {
    All,
    Only(String),
}

impl MoodFilter {
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    All,
    Count(usize),
}

impl FromStr for Limit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Self::All);
        }
        match value.parse::<usize>() {
            Ok(count) if count > 0 => Ok(Self::Count(count)),
            _ => Err(format!("limit must be a positive integer or 'all', got '{value}'")),
        }
    }
}

pub fn timeline(entries: &[Entry], mode: TimelineMode) -> Vec<TimelinePoint> {
    timeline_in(entries, mode, &Local)
}

/// Representative moods, oldest first, labelled in `tz`.
pub fn timeline_in<Tz>(entries: &[Entry], mode: TimelineMode, tz: &Tz) -> Vec<TimelinePoint>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match mode {
        TimelineMode::Last7 => last_entries(entries, 7, tz),
        TimelineMode::Last14 => last_entries(entries, 14, tz),
        TimelineMode::Monthly => monthly(entries, tz),
    }
}

pub fn flashback(entries: &[Entry], mood: &MoodFilter, limit: Limit) -> Vec<FlashbackItem> {
    flashback_in(entries, mood, limit, &Local)
}

/// Entries with notes, newest first, dates rendered in `tz`.
pub fn flashback_in<Tz>(
    entries: &[Entry],
    mood: &MoodFilter,
    limit: Limit,
    tz: &Tz,
) -> Vec<FlashbackItem>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let with_notes: Vec<&Entry> = entries
        .iter()
        .filter(|entry| !entry.notes.trim().is_empty())
        .filter(|entry| match mood {
            MoodFilter::All => true,
            MoodFilter::Only(wanted) => entry.mood == *wanted,
        })
        .collect();

    let mut dated = newest_first(with_notes);
    if let Limit::Count(count) = limit {
        dated.truncate(count);
    }

    dated
        .into_iter()
        .map(|(instant, entry)| FlashbackItem {
            mood: entry.mood.clone(),
            date: instant
                .with_timezone(tz)
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string(),
            notes: entry.notes.clone(),
        })
        .collect()
}

fn last_entries<Tz>(entries: &[Entry], count: usize, tz: &Tz) -> Vec<TimelinePoint>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut recent = newest_first(entries.iter().collect());
    recent.truncate(count);
    recent.reverse();

    recent
        .into_iter()
        .map(|(instant, entry)| TimelinePoint {
            mood: display_mood(&entry.mood),
            label: instant.with_timezone(tz).format("%a").to_string(),
        })
        .collect()
}

fn monthly<Tz: TimeZone>(entries: &[Entry], tz: &Tz) -> Vec<TimelinePoint> {
    let mut by_month: BTreeMap<(i32, u32), Vec<&str>> = BTreeMap::new();
    for entry in entries {
        let Some(instant) = parse_instant(entry) else {
            continue;
        };
        let local = instant.with_timezone(tz);
        by_month
            .entry((local.year(), local.month()))
            .or_default()
            .push(entry.mood.as_str());
    }

    let skip = by_month.len().saturating_sub(MONTHS_SHOWN);
    by_month
        .into_iter()
        .skip(skip)
        .map(|((year, month), moods)| TimelinePoint {
            mood: display_mood(mode_mood(&moods).unwrap_or_default()),
            label: month_label(year, month),
        })
        .collect()
}

/// Most frequent mood. On a tie the mood seen first wins.
pub fn mode_mood<'a>(moods: &[&'a str]) -> Option<&'a str> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for mood in moods {
        *counts.entry(*mood).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (mood, count) in counts {
        if best.is_none_or(|(_, max)| count > max) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, _)| mood)
}

fn newest_first(entries: Vec<&Entry>) -> Vec<(DateTime<Utc>, &Entry)> {
    let mut dated: Vec<_> = entries
        .into_iter()
        .filter_map(|entry| parse_instant(entry).map(|instant| (instant, entry)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated
}

fn parse_instant(entry: &Entry) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(&entry.timestamp) {
        Ok(instant) => Some(instant.with_timezone(&Utc)),
        Err(err) => {
            debug!(timestamp = %entry.timestamp, error = %err, "skipping entry with bad timestamp");
            None
        }
    }
}

fn display_mood(mood: &str) -> String {
    if mood.is_empty() {
        UNKNOWN_MOOD.to_string()
    } else {
        mood.to_string()
    }
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%b").to_string())
        .unwrap_or_default()
}
