use crate::dates::{self, DateRange};
use crate::models::{
    percentage, DailyReport, DailySummary, DayActivity, Goal, GoalPeriod, MonthlyReport,
    MonthlySummary, MonthlyTrends, Report, ReportPeriod, Task, WeekActivity, WeeklyReport,
    WeeklySummary, WeeklyTrends,
};
use chrono::{Duration, Local, NaiveDateTime};

pub fn daily_report(tasks: &[Task]) -> DailyReport {
    daily_report_at(Local::now().naive_local(), tasks)
}

pub fn daily_report_at(now: NaiveDateTime, tasks: &[Task]) -> DailyReport {
    let today = dates::today_range(now.date());
    let today_tasks = dates::filter_by_range(tasks, |task| Some(task.created_at.as_str()), &today);
    let completed = today_tasks.iter().filter(|task| task.completed).count();
    let completion_rate = percentage(completed, today_tasks.len());
    // A task due today is not overdue; only deadlines strictly before today count.
    let overdue = tasks
        .iter()
        .filter(|task| !task.completed)
        .filter(|task| {
            task.deadline
                .as_deref()
                .and_then(dates::parse_timestamp)
                .is_some_and(|deadline| deadline < today.start)
        })
        .count();

    let mut insights = Vec::new();
    if completion_rate == 100 && !today_tasks.is_empty() {
        insights.push("Perfect day! You completed all your tasks!".to_string());
    } else if completion_rate >= 80 {
        insights.push("Great productivity today!".to_string());
    } else if completion_rate >= 50 {
        insights.push("Good progress, keep it up!".to_string());
    } else if !today_tasks.is_empty() {
        insights.push("There's room for improvement tomorrow.".to_string());
    }
    if overdue > 0 {
        insights.push(format!("You have {overdue} overdue task{}.", plural(overdue)));
    }

    DailyReport {
        generated_at: now,
        title: format!("Daily Report - {}", now.format("%A, %B %d, %Y")),
        summary: DailySummary {
            tasks_created: today_tasks.len(),
            tasks_completed: completed,
            completion_rate,
            overdue_tasks: overdue,
        },
        insights,
    }
}

pub fn weekly_report(tasks: &[Task], goals: &[Goal]) -> WeeklyReport {
    weekly_report_at(Local::now().naive_local(), tasks, goals)
}

pub fn weekly_report_at(now: NaiveDateTime, tasks: &[Task], goals: &[Goal]) -> WeeklyReport {
    let week = dates::week_range(now.date());
    let week_tasks = dates::filter_by_range(tasks, |task| Some(task.created_at.as_str()), &week);
    let completed = week_tasks.iter().filter(|task| task.completed).count();
    let completion_rate = percentage(completed, week_tasks.len());
    // Weekly check-ins also track monthly goals.
    let week_goals: Vec<&Goal> = goals
        .iter()
        .filter(|goal| matches!(goal.period, GoalPeriod::Weekly | GoalPeriod::Monthly))
        .collect();
    let goals_completed = week_goals.iter().filter(|goal| goal.completed).count();

    let mut daily_breakdown = Vec::with_capacity(7);
    for offset in 0..7 {
        let date = week.start.date() + Duration::days(offset);
        let (created, done) = count_in_window(&week_tasks, &dates::today_range(date));
        daily_breakdown.push(DayActivity {
            date,
            tasks_created: created,
            tasks_completed: done,
        });
    }

    let mut most_productive_day = daily_breakdown[0].clone();
    for day in &daily_breakdown[1..] {
        if day.tasks_completed > most_productive_day.tasks_completed {
            most_productive_day = day.clone();
        }
    }
    let average_tasks_per_day = (week_tasks.len() as f64 / 7.0).round() as u32;

    let mut insights = Vec::new();
    if completion_rate >= 80 {
        insights.push("Excellent week! You're crushing your goals!".to_string());
    } else if completion_rate >= 60 {
        insights.push("Solid week of productivity!".to_string());
    } else if completion_rate >= 40 {
        insights.push("Decent progress, but there's room to improve.".to_string());
    }
    insights.push(format!(
        "{} was your most productive day with {} tasks completed.",
        most_productive_day.date.format("%A"),
        most_productive_day.tasks_completed
    ));
    if goals_completed > 0 {
        insights.push(format!(
            "You completed {goals_completed} goal{} this week!",
            plural(goals_completed)
        ));
    }

    WeeklyReport {
        generated_at: now,
        title: format!("Weekly Report - Week of {}", week.start.format("%b %d, %Y")),
        period: ReportPeriod {
            start: week.start,
            end: week.end,
        },
        summary: WeeklySummary {
            tasks_created: week_tasks.len(),
            tasks_completed: completed,
            completion_rate,
            active_goals: week_goals.len(),
            goals_completed,
        },
        daily_breakdown,
        trends: WeeklyTrends {
            most_productive_day,
            average_tasks_per_day,
        },
        insights,
    }
}

pub fn monthly_report(tasks: &[Task], goals: &[Goal]) -> MonthlyReport {
    monthly_report_at(Local::now().naive_local(), tasks, goals)
}

pub fn monthly_report_at(now: NaiveDateTime, tasks: &[Task], goals: &[Goal]) -> MonthlyReport {
    let month = dates::month_range(now.date());
    let month_tasks = dates::filter_by_range(tasks, |task| Some(task.created_at.as_str()), &month);
    let completed = month_tasks.iter().filter(|task| task.completed).count();
    let completion_rate = percentage(completed, month_tasks.len());
    let month_goals: Vec<&Goal> = goals
        .iter()
        .filter(|goal| goal.period == GoalPeriod::Monthly)
        .collect();
    let goals_completed = month_goals.iter().filter(|goal| goal.completed).count();
    let goal_completion_rate = percentage(goals_completed, month_goals.len());

    // Consecutive 7-day windows from the 1st; the last window may run past
    // month end, but only in-month tasks are present in month_tasks.
    let mut weekly_breakdown = Vec::new();
    let mut window_start = month.start.date();
    let month_end = month.end.date();
    while window_start <= month_end {
        let window_end = window_start + Duration::days(6);
        let (created, done) =
            count_in_window(&month_tasks, &dates::day_span(window_start, window_end));
        weekly_breakdown.push(WeekActivity {
            week_start: window_start,
            week_end: window_end,
            tasks_created: created,
            tasks_completed: done,
        });
        window_start = window_end + Duration::days(1);
    }

    let mut most_productive_week = weekly_breakdown[0].clone();
    for week in &weekly_breakdown[1..] {
        if week.tasks_completed > most_productive_week.tasks_completed {
            most_productive_week = week.clone();
        }
    }
    let average_tasks_per_week =
        (month_tasks.len() as f64 / weekly_breakdown.len() as f64).round() as u32;
    // Task performance is weighted higher than goal performance.
    let productivity_score =
        (completion_rate as f64 * 0.6 + goal_completion_rate as f64 * 0.4).round() as u32;

    let mut insights = Vec::new();
    if productivity_score >= 90 {
        insights.push("Outstanding month! You're at peak performance!".to_string());
    } else if productivity_score >= 75 {
        insights.push("Fantastic month! Keep up the great work!".to_string());
    } else if productivity_score >= 60 {
        insights.push("Good month overall. You're making steady progress.".to_string());
    } else if productivity_score >= 40 {
        insights.push("Room for improvement. Let's aim higher next month!".to_string());
    } else {
        insights.push("New month, fresh start! Set achievable goals and build momentum.".to_string());
    }
    if goals_completed == month_goals.len() && !month_goals.is_empty() {
        insights.push("Perfect! You achieved all your monthly goals!".to_string());
    } else if goal_completion_rate >= 75 {
        insights.push(format!("Great goal achievement rate: {goal_completion_rate}%"));
    }
    insights.push(format!(
        "You completed an average of {average_tasks_per_week} tasks per week."
    ));
    if completed > 0 {
        insights.push(format!("Total accomplishments: {completed} tasks completed!"));
    }

    MonthlyReport {
        generated_at: now,
        title: format!("Monthly Report - {}", month.start.format("%B %Y")),
        period: ReportPeriod {
            start: month.start,
            end: month.end,
        },
        summary: MonthlySummary {
            tasks_created: month_tasks.len(),
            tasks_completed: completed,
            completion_rate,
            monthly_goals: month_goals.len(),
            goals_completed,
            goal_completion_rate,
        },
        weekly_breakdown,
        trends: MonthlyTrends {
            most_productive_week,
            average_tasks_per_week,
            productivity_score,
        },
        insights,
    }
}

pub fn format_report_as_markdown(report: &Report) -> String {
    match report {
        Report::Daily(daily) => {
            let mut out = header(&daily.title, daily.generated_at);
            summary_lines(
                &mut out,
                daily.summary.tasks_created,
                daily.summary.tasks_completed,
                daily.summary.completion_rate,
            );
            out.push_str(&format!(
                "- **Overdue Tasks:** {}\n",
                daily.summary.overdue_tasks
            ));
            insight_lines(&mut out, &daily.insights);
            out
        }
        Report::Weekly(weekly) => {
            let mut out = header(&weekly.title, weekly.generated_at);
            summary_lines(
                &mut out,
                weekly.summary.tasks_created,
                weekly.summary.tasks_completed,
                weekly.summary.completion_rate,
            );
            out.push_str(&format!(
                "- **Active Goals:** {}\n",
                weekly.summary.active_goals
            ));
            out.push_str(&format!(
                "- **Goals Completed:** {}\n",
                weekly.summary.goals_completed
            ));
            insight_lines(&mut out, &weekly.insights);
            out.push_str("## Trends\n\n");
            out.push_str(&format!(
                "- **Most Productive Day:** {} ({} tasks completed)\n",
                weekly.trends.most_productive_day.date.format("%A"),
                weekly.trends.most_productive_day.tasks_completed
            ));
            out.push_str(&format!(
                "- **Average Tasks Per Day:** {}\n",
                weekly.trends.average_tasks_per_day
            ));
            out
        }
        Report::Monthly(monthly) => {
            let mut out = header(&monthly.title, monthly.generated_at);
            summary_lines(
                &mut out,
                monthly.summary.tasks_created,
                monthly.summary.tasks_completed,
                monthly.summary.completion_rate,
            );
            out.push_str(&format!(
                "- **Monthly Goals:** {}\n",
                monthly.summary.monthly_goals
            ));
            out.push_str(&format!(
                "- **Goal Completion Rate:** {}%\n",
                monthly.summary.goal_completion_rate
            ));
            insight_lines(&mut out, &monthly.insights);
            out.push_str("## Trends\n\n");
            out.push_str(&format!(
                "- **Productivity Score:** {}/100\n",
                monthly.trends.productivity_score
            ));
            out.push_str(&format!(
                "- **Most Productive Week:** {} - {} ({} tasks completed)\n",
                monthly.trends.most_productive_week.week_start.format("%b %d"),
                monthly.trends.most_productive_week.week_end.format("%b %d"),
                monthly.trends.most_productive_week.tasks_completed
            ));
            out.push_str(&format!(
                "- **Average Tasks Per Week:** {}\n",
                monthly.trends.average_tasks_per_week
            ));
            out
        }
    }
}

fn count_in_window(tasks: &[&Task], window: &DateRange) -> (usize, usize) {
    let mut created = 0;
    let mut completed = 0;
    for task in tasks {
        let Some(instant) = dates::parse_timestamp(&task.created_at) else {
            continue;
        };
        if window.contains(instant) {
            created += 1;
            if task.completed {
                completed += 1;
            }
        }
    }
    (created, completed)
}

fn header(title: &str, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {title}\n\n"));
    out.push_str(&format!(
        "*Generated on {}*\n\n",
        generated_at.format("%B %d, %Y at %H:%M")
    ));
    out
}

fn summary_lines(out: &mut String, created: usize, completed: usize, rate: u32) {
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Tasks Created:** {created}\n"));
    out.push_str(&format!("- **Tasks Completed:** {completed}\n"));
    out.push_str(&format!("- **Completion Rate:** {rate}%\n"));
}

fn insight_lines(out: &mut String, insights: &[String]) {
    out.push_str("\n## Insights\n\n");
    for insight in insights {
        out.push_str(insight);
        out.push_str("\n\n");
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{new_id, Priority};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn task(created: &str, completed: bool) -> Task {
        Task {
            id: new_id(),
            title: "task".to_string(),
            description: String::new(),
            deadline: None,
            priority: Priority::Medium,
            completed,
            completed_at: None,
            created_at: created.to_string(),
            updated_at: created.to_string(),
        }
    }

    fn goal(period: GoalPeriod, completed: bool) -> Goal {
        Goal {
            id: new_id(),
            title: "goal".to_string(),
            description: String::new(),
            period,
            target_date: None,
            progress: if completed { 100 } else { 0 },
            milestones: Vec::new(),
            completed,
            created_at: "2026-01-01T08:00:00".to_string(),
            updated_at: "2026-01-01T08:00:00".to_string(),
        }
    }

    #[test]
    fn daily_report_counts_today_and_overdue() {
        let now = at(2026, 1, 7, 12, 0);
        let mut overdue = task("2026-01-07T09:00:00", false);
        overdue.deadline = Some("2026-01-06T18:00:00".to_string());
        let tasks = vec![
            task("2026-01-07T08:00:00", true),
            task("2026-01-07T10:30:00", true),
            overdue,
            task("2026-01-02T10:00:00", false),
        ];

        let report = daily_report_at(now, &tasks);
        assert_eq!(report.summary.tasks_created, 3);
        assert_eq!(report.summary.tasks_completed, 2);
        assert_eq!(report.summary.completion_rate, 67);
        assert_eq!(report.summary.overdue_tasks, 1);
        assert_eq!(report.title, "Daily Report - Wednesday, January 07, 2026");
        assert!(report.insights.iter().any(|i| i == "Good progress, keep it up!"));
        assert!(report.insights.iter().any(|i| i == "You have 1 overdue task."));
    }

    #[test]
    fn daily_report_empty_inputs_degrade_to_zero() {
        let report = daily_report_at(at(2026, 1, 7, 12, 0), &[]);
        assert_eq!(report.summary.tasks_created, 0);
        assert_eq!(report.summary.tasks_completed, 0);
        assert_eq!(report.summary.completion_rate, 0);
        assert_eq!(report.summary.overdue_tasks, 0);
        assert!(report.insights.is_empty());
    }

    #[test]
    fn daily_report_perfect_day_tops_the_ladder() {
        let tasks = vec![task("2026-01-07T08:00:00", true)];
        let report = daily_report_at(at(2026, 1, 7, 12, 0), &tasks);
        assert_eq!(report.summary.completion_rate, 100);
        assert_eq!(
            report.insights,
            vec!["Perfect day! You completed all your tasks!".to_string()]
        );
    }

    #[test]
    fn task_due_today_is_not_overdue() {
        let mut due_today = task("2026-01-05T08:00:00", false);
        due_today.deadline = Some("2026-01-07".to_string());
        let report = daily_report_at(at(2026, 1, 7, 12, 0), &[due_today]);
        assert_eq!(report.summary.overdue_tasks, 0);
        assert_eq!(report.summary.tasks_created, 0);
    }

    #[test]
    fn weekly_breakdown_always_has_seven_entries() {
        // 2026-01-07 is a Wednesday; its week runs Jan 5 through Jan 11.
        let now = at(2026, 1, 7, 12, 0);
        let tasks = vec![
            task("2026-01-05T09:00:00", true),
            task("2026-01-05T11:00:00", false),
            task("2026-01-06T09:00:00", true),
            task("2026-01-06T10:00:00", true),
            task("2026-01-04T09:00:00", true),
        ];

        let report = weekly_report_at(now, &tasks, &[]);
        assert_eq!(report.daily_breakdown.len(), 7);
        assert_eq!(report.summary.tasks_created, 4);
        for day in &report.daily_breakdown {
            assert!(day.tasks_created >= day.tasks_completed);
        }

        let tuesday = &report.daily_breakdown[1];
        assert_eq!(tuesday.date, date(2026, 1, 6));
        assert_eq!(tuesday.tasks_created, 2);
        assert_eq!(tuesday.tasks_completed, 2);
        assert_eq!(report.trends.most_productive_day.date, date(2026, 1, 6));
        assert_eq!(report.trends.average_tasks_per_day, 1);
        assert!(report
            .insights
            .iter()
            .any(|i| i == "Tuesday was your most productive day with 2 tasks completed."));
    }

    #[test]
    fn most_productive_day_tie_goes_to_the_earlier_day() {
        let now = at(2026, 1, 7, 12, 0);
        let tasks = vec![
            task("2026-01-05T09:00:00", true),
            task("2026-01-06T09:00:00", true),
        ];
        let report = weekly_report_at(now, &tasks, &[]);
        assert_eq!(report.trends.most_productive_day.date, date(2026, 1, 5));
    }

    #[test]
    fn weekly_report_counts_weekly_and_monthly_goals() {
        let goals = vec![
            goal(GoalPeriod::Weekly, true),
            goal(GoalPeriod::Monthly, false),
            goal(GoalPeriod::Custom, true),
        ];
        let report = weekly_report_at(at(2026, 1, 7, 12, 0), &[], &goals);
        assert_eq!(report.summary.active_goals, 2);
        assert_eq!(report.summary.goals_completed, 1);
        assert!(report
            .insights
            .iter()
            .any(|i| i == "You completed 1 goal this week!"));
    }

    #[test]
    fn monthly_score_weights_tasks_over_goals() {
        let now = at(2026, 1, 20, 9, 0);
        let mut tasks = Vec::new();
        for i in 0..5 {
            tasks.push(task(&format!("2026-01-{:02}T10:00:00", 5 + i), i < 4));
        }
        let goals = vec![
            goal(GoalPeriod::Monthly, true),
            goal(GoalPeriod::Monthly, false),
        ];

        let report = monthly_report_at(now, &tasks, &goals);
        assert_eq!(report.summary.completion_rate, 80);
        assert_eq!(report.summary.goal_completion_rate, 50);
        assert_eq!(report.trends.productivity_score, 68);
        assert!(report
            .insights
            .iter()
            .any(|i| i == "Good month overall. You're making steady progress."));
    }

    #[test]
    fn monthly_windows_tile_the_month_from_the_first() {
        let now = at(2026, 1, 20, 9, 0);
        let tasks = vec![
            task("2026-01-01T08:00:00", false),
            task("2026-01-07T22:30:00", true),
            task("2026-01-08T08:00:00", false),
            task("2026-01-31T12:00:00", true),
            task("2026-02-01T00:00:00", false),
        ];

        let report = monthly_report_at(now, &tasks, &[]);
        assert_eq!(report.summary.tasks_created, 4);
        assert_eq!(report.weekly_breakdown.len(), 5);

        let first = &report.weekly_breakdown[0];
        assert_eq!(first.week_start, date(2026, 1, 1));
        assert_eq!(first.week_end, date(2026, 1, 7));
        assert_eq!(first.tasks_created, 2);

        let last = &report.weekly_breakdown[4];
        assert_eq!(last.week_start, date(2026, 1, 29));
        assert_eq!(last.week_end, date(2026, 2, 4));
        assert_eq!(last.tasks_created, 1);

        let total: usize = report.weekly_breakdown.iter().map(|w| w.tasks_created).sum();
        assert_eq!(total, report.summary.tasks_created);
    }

    #[test]
    fn monthly_report_empty_inputs_still_carry_the_ladder() {
        let report = monthly_report_at(at(2026, 1, 20, 9, 0), &[], &[]);
        assert_eq!(report.trends.productivity_score, 0);
        assert_eq!(
            report.insights[0],
            "New month, fresh start! Set achievable goals and build momentum."
        );
        assert!(report
            .insights
            .iter()
            .any(|i| i == "You completed an average of 0 tasks per week."));
        assert!(!report
            .insights
            .iter()
            .any(|i| i.starts_with("Total accomplishments")));
    }

    #[test]
    fn monthly_goal_insights_prefer_perfect_over_rate() {
        let report = monthly_report_at(at(2026, 1, 20, 9, 0), &[], &[goal(GoalPeriod::Monthly, true)]);
        assert!(report
            .insights
            .iter()
            .any(|i| i == "Perfect! You achieved all your monthly goals!"));
        assert!(!report
            .insights
            .iter()
            .any(|i| i.starts_with("Great goal achievement rate")));

        let goals = vec![
            goal(GoalPeriod::Monthly, true),
            goal(GoalPeriod::Monthly, true),
            goal(GoalPeriod::Monthly, true),
            goal(GoalPeriod::Monthly, false),
        ];
        let report = monthly_report_at(at(2026, 1, 20, 9, 0), &[], &goals);
        assert!(report
            .insights
            .iter()
            .any(|i| i == "Great goal achievement rate: 75%"));
    }

    #[test]
    fn markdown_daily_lists_overdue_and_no_goal_bullets() {
        let now = at(2026, 1, 7, 12, 0);
        let mut first = task("2026-01-07T08:00:00", false);
        first.deadline = Some("2026-01-05".to_string());
        let mut second = task("2026-01-06T08:00:00", false);
        second.deadline = Some("2026-01-06T09:00:00".to_string());

        let report = Report::Daily(daily_report_at(now, &[first, second]));
        let markdown = format_report_as_markdown(&report);

        assert!(markdown.starts_with("# Daily Report - Wednesday, January 07, 2026\n\n"));
        assert!(markdown.contains("*Generated on January 07, 2026 at 12:00*"));
        assert!(markdown.contains("- **Overdue Tasks:** 2\n"));
        assert!(!markdown.contains("Goals"));
        assert!(!markdown.contains("## Trends"));
        assert!(markdown.contains(
            "## Insights\n\nThere's room for improvement tomorrow.\n\nYou have 2 overdue tasks.\n\n"
        ));
    }

    #[test]
    fn markdown_weekly_and_monthly_carry_their_trends() {
        let now = at(2026, 1, 7, 12, 0);
        let tasks = vec![task("2026-01-05T09:00:00", true)];

        let weekly = Report::Weekly(weekly_report_at(now, &tasks, &[]));
        let markdown = format_report_as_markdown(&weekly);
        assert!(markdown.contains("# Weekly Report - Week of Jan 05, 2026"));
        assert!(markdown.contains("- **Active Goals:** 0\n- **Goals Completed:** 0\n"));
        assert!(markdown.contains(
            "## Trends\n\n- **Most Productive Day:** Monday (1 tasks completed)\n- **Average Tasks Per Day:** 0\n"
        ));

        let monthly = Report::Monthly(monthly_report_at(now, &tasks, &[]));
        let markdown = format_report_as_markdown(&monthly);
        assert!(markdown.contains("# Monthly Report - January 2026"));
        assert!(markdown.contains("- **Monthly Goals:** 0\n- **Goal Completion Rate:** 0%\n"));
        assert!(markdown.contains("- **Productivity Score:** 60/100\n"));
        assert!(markdown.contains("- **Most Productive Week:** Jan 01 - Jan 07 (1 tasks completed)\n"));
        assert!(markdown.contains("- **Average Tasks Per Week:** 0\n"));
    }
}
