use crate::entities::{
    client_entity as clients, course_entity as courses, lesson_client_entity as lesson_clients,
    lesson_entity as lessons, profile_entity as profiles,
};
use crate::error::AppResult;
use crate::models::*;
use crate::services::lookup::{ensure_deleted, find_or_not_found, find_referenced};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};

#[derive(Clone)]
pub struct LessonService {
    pool: DatabaseConnection,
}

impl LessonService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_lessons(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<LessonResponse>> {
        let total = lessons::Entity::find().count(&self.pool).await?;
        let page = lessons::Entity::find()
            .order_by_asc(lessons::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?;
        let items = self.to_responses(page).await?;
        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn get_lesson(&self, id: i64) -> AppResult<LessonResponse> {
        let lesson = find_or_not_found::<lessons::Entity, _>(&self.pool, id, "Lesson").await?;
        let mut items = self.to_responses(vec![lesson]).await?;
        Ok(items.remove(0))
    }

    pub async fn create_lesson(&self, request: LessonRequest) -> AppResult<LessonResponse> {
        let client_ids = self.check_references(&request).await?;

        let txn = self.pool.begin().await?;
        let lesson = lessons::ActiveModel {
            course_id: Set(request.course_id),
            lesson_date: Set(request.lesson_date),
            lesson_time: Set(request.lesson_time),
            teacher_id: Set(request.teacher_id),
            is_conducted: Set(request.is_conducted),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        replace_clients(&txn, lesson.id, &client_ids).await?;
        txn.commit().await?;

        log::info!(
            "Created lesson {} on {} with {} clients",
            lesson.id,
            lesson.lesson_date,
            client_ids.len()
        );
        self.get_lesson(lesson.id).await
    }

    /// Full change; the attending client set is replaced.
    pub async fn update_lesson(&self, id: i64, request: LessonRequest) -> AppResult<LessonResponse> {
        let lesson = find_or_not_found::<lessons::Entity, _>(&self.pool, id, "Lesson").await?;
        let client_ids = self.check_references(&request).await?;

        let txn = self.pool.begin().await?;
        let mut model = lesson.into_active_model();
        model.course_id = Set(request.course_id);
        model.lesson_date = Set(request.lesson_date);
        model.lesson_time = Set(request.lesson_time);
        model.teacher_id = Set(request.teacher_id);
        model.is_conducted = Set(request.is_conducted);
        model.update(&txn).await?;
        replace_clients(&txn, id, &client_ids).await?;
        txn.commit().await?;

        log::info!("Updated lesson {id}");
        self.get_lesson(id).await
    }

    pub async fn delete_lesson(&self, id: i64) -> AppResult<()> {
        let result = lessons::Entity::delete_by_id(id).exec(&self.pool).await?;
        ensure_deleted(result.rows_affected, "Lesson", id)?;
        log::info!("Deleted lesson {id}");
        Ok(())
    }

    /// Returns the deduplicated client ids once every reference is known to exist.
    async fn check_references(&self, request: &LessonRequest) -> AppResult<BTreeSet<i64>> {
        if let Some(course_id) = request.course_id {
            find_referenced::<courses::Entity, _>(&self.pool, course_id, "course_id").await?;
        }
        if let Some(teacher_id) = request.teacher_id {
            find_referenced::<profiles::Entity, _>(&self.pool, teacher_id, "teacher_id").await?;
        }
        let client_ids: BTreeSet<i64> = request.client_ids.iter().copied().collect();
        for client_id in &client_ids {
            find_referenced::<clients::Entity, _>(&self.pool, *client_id, "client_ids").await?;
        }
        Ok(client_ids)
    }

    async fn to_responses(&self, page: Vec<lessons::Model>) -> AppResult<Vec<LessonResponse>> {
        let lesson_ids: Vec<i64> = page.iter().map(|l| l.id).collect();
        let course_ids: Vec<i64> = page.iter().filter_map(|l| l.course_id).collect();

        let course_names: HashMap<i64, String> = courses::Entity::find()
            .filter(courses::Column::Id.is_in(course_ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        let mut attendance: HashMap<i64, Vec<i64>> = HashMap::new();
        for link in lesson_clients::Entity::find()
            .filter(lesson_clients::Column::LessonId.is_in(lesson_ids))
            .order_by_asc(lesson_clients::Column::ClientId)
            .all(&self.pool)
            .await?
        {
            attendance.entry(link.lesson_id).or_default().push(link.client_id);
        }

        Ok(page
            .into_iter()
            .map(|lesson| {
                let course_name = lesson
                    .course_id
                    .and_then(|id| course_names.get(&id))
                    .map(String::as_str);
                let client_ids = attendance.remove(&lesson.id).unwrap_or_default();
                LessonResponse::new(lesson, course_name, client_ids)
            })
            .collect())
    }
}

async fn replace_clients<C: ConnectionTrait>(
    db: &C,
    lesson_id: i64,
    client_ids: &BTreeSet<i64>,
) -> AppResult<()> {
    lesson_clients::Entity::delete_many()
        .filter(lesson_clients::Column::LessonId.eq(lesson_id))
        .exec(db)
        .await?;
    for client_id in client_ids {
        lesson_clients::ActiveModel {
            lesson_id: Set(lesson_id),
            client_id: Set(*client_id),
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory_pool;
    use crate::error::AppError;
    use crate::services::testing::{create_client, create_course, create_teacher};
    use crate::services::{ClientService, CourseService, ProfileService};
    use chrono::{NaiveDate, NaiveTime};

    fn request(course_id: Option<i64>, teacher_id: Option<i64>, clients: Vec<i64>) -> LessonRequest {
        LessonRequest {
            course_id,
            lesson_date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            lesson_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            teacher_id,
            client_ids: clients,
            is_conducted: false,
        }
    }

    #[tokio::test]
    async fn test_lesson_with_attending_clients() {
        let pool = memory_pool().await;
        let teacher = create_teacher(&pool, "anna").await;
        let course = create_course(&pool, teacher, "Йога").await;
        let ivan = create_client(&pool, "Иван").await;
        let olga = create_client(&pool, "Ольга").await;
        let service = LessonService::new(pool);

        let lesson = service
            .create_lesson(request(Some(course), Some(teacher), vec![olga, ivan, olga]))
            .await
            .unwrap();
        assert_eq!(lesson.client_ids, vec![ivan, olga]);
        assert_eq!(lesson.display, "Йога, 2024-09-02 - 10:00:00");

        let mut change = request(Some(course), Some(teacher), vec![ivan]);
        change.is_conducted = true;
        let updated = service.update_lesson(lesson.id, change).await.unwrap();
        assert_eq!(updated.client_ids, vec![ivan]);
        assert!(updated.is_conducted);
    }

    #[tokio::test]
    async fn test_unknown_client_is_rejected() {
        let pool = memory_pool().await;
        let service = LessonService::new(pool);
        assert!(matches!(
            service.create_lesson(request(None, None, vec![77])).await,
            Err(AppError::FieldError { ref field, .. }) if field == "client_ids"
        ));
    }

    #[tokio::test]
    async fn test_deleting_course_keeps_lessons_and_drops_schedules() {
        let pool = memory_pool().await;
        let teacher = create_teacher(&pool, "anna").await;
        let courses = CourseService::new(pool.clone());
        let course = courses
            .create_course(CourseRequest {
                name: "Йога".into(),
                description: String::new(),
                teacher_id: teacher,
                schedules: Some(vec![ScheduleRequest {
                    id: None,
                    day_of_week: 0,
                    start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                }]),
            })
            .await
            .unwrap();
        let service = LessonService::new(pool.clone());
        let lesson = service
            .create_lesson(request(Some(course.id), Some(teacher), vec![]))
            .await
            .unwrap();

        courses.delete_course(course.id).await.unwrap();

        let kept = service.get_lesson(lesson.id).await.unwrap();
        assert_eq!(kept.course_id, None);
        assert_eq!(kept.teacher_id, Some(teacher));
        assert_eq!(kept.display, "2024-09-02 - 10:00:00");
        let orphans = crate::entities::schedule_entity::Entity::find()
            .count(&pool)
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn test_deleting_profile_drops_courses_and_nulls_lesson_teacher() {
        let pool = memory_pool().await;
        let teacher = create_teacher(&pool, "anna").await;
        let course = create_course(&pool, teacher, "Йога").await;
        let service = LessonService::new(pool.clone());
        let lesson = service
            .create_lesson(request(Some(course), Some(teacher), vec![]))
            .await
            .unwrap();

        ProfileService::new(pool.clone())
            .delete_profile(teacher)
            .await
            .unwrap();

        assert!(matches!(
            CourseService::new(pool.clone()).get_course(course).await,
            Err(AppError::NotFound(_))
        ));
        let kept = service.get_lesson(lesson.id).await.unwrap();
        assert_eq!(kept.teacher_id, None);
        assert_eq!(kept.course_id, None);
    }

    #[tokio::test]
    async fn test_deleting_client_removes_attendance_only() {
        let pool = memory_pool().await;
        let ivan = create_client(&pool, "Иван").await;
        let olga = create_client(&pool, "Ольга").await;
        let service = LessonService::new(pool.clone());
        let lesson = service
            .create_lesson(request(None, None, vec![ivan, olga]))
            .await
            .unwrap();

        ClientService::new(pool).delete_client(ivan).await.unwrap();

        let kept = service.get_lesson(lesson.id).await.unwrap();
        assert_eq!(kept.client_ids, vec![olga]);
    }
}
