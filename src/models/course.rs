use crate::entities::{DayOfWeek, course_entity as courses, schedule_entity as schedules};
use crate::error::{AppError, AppResult};
use crate::models::validate_required_text;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the inline schedule table on a course.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleRequest {
    /// Existing row to change; new row when absent
    pub id: Option<i64>,
    /// 0 = Monday ... 6 = Sunday
    #[schema(example = 0)]
    pub day_of_week: i32,
    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,
}

impl ScheduleRequest {
    pub fn day(&self) -> AppResult<DayOfWeek> {
        DayOfWeek::from_index(self.day_of_week).ok_or_else(|| {
            AppError::field(
                "day_of_week",
                format!(
                    "Значения {} нет среди допустимых вариантов.",
                    self.day_of_week
                ),
            )
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseRequest {
    #[schema(example = "Йога")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub teacher_id: i64,
    /// Inline schedule table. On change, omitted means untouched.
    #[serde(default)]
    pub schedules: Option<Vec<ScheduleRequest>>,
}

impl CourseRequest {
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text("name", &self.name, 100)?;
        for schedule in self.schedules.iter().flatten() {
            schedule.day()?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScheduleResponse {
    pub id: i64,
    pub day_of_week: i32,
    pub day_of_week_display: String,
    #[schema(value_type = String, example = "10:00:00")]
    pub start_time: NaiveTime,
    pub display: String,
}

impl ScheduleResponse {
    pub fn new(m: schedules::Model, course_name: &str) -> Self {
        Self {
            id: m.id,
            day_of_week: m.day_of_week.index(),
            day_of_week_display: m.day_of_week.name().to_string(),
            start_time: m.start_time,
            display: m.display_name(course_name),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub teacher_id: i64,
    pub schedules: Vec<ScheduleResponse>,
    /// Name with the weekly timetable
    #[schema(example = "Йога, пн, ср 10:00 (пн), 19:00 (ср)")]
    pub display: String,
}

impl CourseResponse {
    pub fn new(course: courses::Model, schedules: Vec<schedules::Model>) -> Self {
        let display = course.summary(&schedules);
        let schedules = schedules
            .into_iter()
            .map(|s| ScheduleResponse::new(s, &course.name))
            .collect();
        Self {
            id: course.id,
            name: course.name,
            description: course.description,
            teacher_id: course.teacher_id,
            schedules,
            display,
        }
    }
}
