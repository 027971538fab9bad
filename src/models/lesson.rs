use crate::entities::lesson_entity as lessons;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LessonRequest {
    pub course_id: Option<i64>,
    #[schema(example = "2024-09-02")]
    pub lesson_date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub lesson_time: NaiveTime,
    pub teacher_id: Option<i64>,
    /// Attending clients; replaces the current set
    #[serde(default)]
    pub client_ids: Vec<i64>,
    #[serde(default)]
    pub is_conducted: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LessonResponse {
    pub id: i64,
    pub course_id: Option<i64>,
    pub lesson_date: NaiveDate,
    #[schema(value_type = String, example = "10:00:00")]
    pub lesson_time: NaiveTime,
    pub teacher_id: Option<i64>,
    pub client_ids: Vec<i64>,
    pub is_conducted: bool,
    pub display: String,
}

impl LessonResponse {
    pub fn new(m: lessons::Model, course_name: Option<&str>, client_ids: Vec<i64>) -> Self {
        let display = m.display_name(course_name);
        Self {
            id: m.id,
            course_id: m.course_id,
            lesson_date: m.lesson_date,
            lesson_time: m.lesson_time,
            teacher_id: m.teacher_id,
            client_ids,
            is_conducted: m.is_conducted,
            display,
        }
    }
}
