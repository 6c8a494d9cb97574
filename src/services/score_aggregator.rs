use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use crate::models::domain::{
    user_progress::rank_for_points, QuizAttempt, UserProgress,
};

/// `round(100 * score / max_score)`, rounding halves up, within `0..=100`.
/// A zero max score yields 0 rather than dividing by zero.
pub fn percentage(attempt: &QuizAttempt) -> u32 {
    if attempt.max_score == 0 {
        log::debug!("attempt {} has max score 0; percentage reported as 0", attempt.id);
        return 0;
    }
    if attempt.score > attempt.max_score {
        log::debug!(
            "attempt {} scored {} over a max of {}; percentage clamped to 100",
            attempt.id,
            attempt.score,
            attempt.max_score
        );
        return 100;
    }
    let score = u64::from(attempt.score);
    let max = u64::from(attempt.max_score);
    u32::try_from((200 * score + max) / (2 * max)).unwrap_or(100)
}

pub fn completed_count(attempts: &[QuizAttempt]) -> u32 {
    attempts.iter().filter(|a| a.is_completed()).count() as u32
}

/// Mean percentage over completed attempts; 0.0 when none are completed.
pub fn average_score(attempts: &[QuizAttempt]) -> f64 {
    let percentages: Vec<u32> = attempts
        .iter()
        .filter(|a| a.is_completed())
        .map(percentage)
        .collect();

    if percentages.is_empty() {
        return 0.0;
    }
    percentages.iter().map(|p| f64::from(*p)).sum::<f64>() / percentages.len() as f64
}

pub fn total_points(attempts: &[QuizAttempt]) -> u64 {
    attempts
        .iter()
        .filter(|a| a.is_completed())
        .map(|a| u64::from(a.score))
        .sum()
}

/// Consecutive UTC days with a completed attempt, ending today (or yesterday
/// when nothing has been completed yet today).
pub fn current_streak(attempts: &[QuizAttempt], today: NaiveDate) -> u32 {
    let active_days: HashSet<NaiveDate> = attempts
        .iter()
        .filter(|a| a.is_completed())
        .map(|a| a.submitted_at.date_naive())
        .collect();

    let mut day = if active_days.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) if active_days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    while active_days.contains(&day) {
        streak += 1;
        day = match day.checked_sub_days(Days::new(1)) {
            Some(previous) => previous,
            None => break,
        };
    }
    streak
}

pub fn derive_progress(attempts: &[QuizAttempt], today: NaiveDate) -> UserProgress {
    let points = total_points(attempts);
    UserProgress {
        quizzes_completed: completed_count(attempts),
        average_score: average_score(attempts).round() as u32,
        current_streak: current_streak(attempts, today),
        total_points: points,
        rank: rank_for_points(points).to_string(),
    }
}
