use crate::entities::{
    course_entity as courses, profile_entity as profiles, schedule_entity as schedules,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::lookup::{ensure_deleted, find_or_not_found, find_referenced};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::{HashMap, HashSet};

#[derive(Clone)]
pub struct CourseService {
    pool: DatabaseConnection,
}

impl CourseService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_courses(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<CourseResponse>> {
        let total = courses::Entity::find().count(&self.pool).await?;
        let page = courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .limit(params.get_limit())
            .offset(params.get_offset())
            .all(&self.pool)
            .await?;

        let ids: Vec<i64> = page.iter().map(|c| c.id).collect();
        let mut by_course: HashMap<i64, Vec<schedules::Model>> = HashMap::new();
        for schedule in schedules::Entity::find()
            .filter(schedules::Column::CourseId.is_in(ids))
            .order_by_asc(schedules::Column::Id)
            .all(&self.pool)
            .await?
        {
            by_course.entry(schedule.course_id).or_default().push(schedule);
        }

        let items = page
            .into_iter()
            .map(|course| {
                let slots = by_course.remove(&course.id).unwrap_or_default();
                CourseResponse::new(course, slots)
            })
            .collect();
        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn get_course(&self, id: i64) -> AppResult<CourseResponse> {
        let course = find_or_not_found::<courses::Entity, _>(&self.pool, id, "Course").await?;
        let slots = course_schedules(&self.pool, id).await?;
        Ok(CourseResponse::new(course, slots))
    }

    /// Creates the course and every row of its inline schedule table.
    pub async fn create_course(&self, request: CourseRequest) -> AppResult<CourseResponse> {
        request.validate()?;
        find_referenced::<profiles::Entity, _>(&self.pool, request.teacher_id, "teacher_id")
            .await?;
        if request.schedules.iter().flatten().any(|s| s.id.is_some()) {
            return Err(AppError::field(
                "schedules",
                "New course cannot reference existing schedule rows",
            ));
        }

        let txn = self.pool.begin().await?;
        let course = courses::ActiveModel {
            name: Set(request.name),
            description: Set(request.description),
            teacher_id: Set(request.teacher_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        for row in request.schedules.unwrap_or_default() {
            insert_schedule(&txn, course.id, &row).await?;
        }
        let slots = course_schedules(&txn, course.id).await?;
        txn.commit().await?;

        log::info!("Created course {} with {} schedule rows", course.id, slots.len());
        Ok(CourseResponse::new(course, slots))
    }

    /// Changes the course and, when given, syncs its schedule table: known
    /// rows are changed, rows without id are added, missing rows are deleted.
    pub async fn update_course(&self, id: i64, request: CourseRequest) -> AppResult<CourseResponse> {
        request.validate()?;
        let course = find_or_not_found::<courses::Entity, _>(&self.pool, id, "Course").await?;
        find_referenced::<profiles::Entity, _>(&self.pool, request.teacher_id, "teacher_id")
            .await?;

        let txn = self.pool.begin().await?;
        let mut model = course.into_active_model();
        model.name = Set(request.name);
        model.description = Set(request.description);
        model.teacher_id = Set(request.teacher_id);
        let updated = model.update(&txn).await?;

        if let Some(rows) = request.schedules {
            let existing: HashMap<i64, schedules::Model> = course_schedules(&txn, id)
                .await?
                .into_iter()
                .map(|s| (s.id, s))
                .collect();
            let mut kept = HashSet::new();

            for row in &rows {
                match row.id {
                    Some(schedule_id) => {
                        let current = existing.get(&schedule_id).cloned().ok_or_else(|| {
                            AppError::field(
                                "schedules",
                                format!("Schedule {schedule_id} does not belong to course {id}"),
                            )
                        })?;
                        let mut slot = current.into_active_model();
                        slot.day_of_week = Set(row.day()?);
                        slot.start_time = Set(row.start_time);
                        slot.update(&txn).await?;
                        kept.insert(schedule_id);
                    }
                    None => {
                        insert_schedule(&txn, id, row).await?;
                    }
                }
            }

            let removed: Vec<i64> = existing
                .keys()
                .filter(|schedule_id| !kept.contains(*schedule_id))
                .copied()
                .collect();
            if !removed.is_empty() {
                schedules::Entity::delete_many()
                    .filter(schedules::Column::Id.is_in(removed))
                    .exec(&txn)
                    .await?;
            }
        }

        let slots = course_schedules(&txn, id).await?;
        txn.commit().await?;

        log::info!("Updated course {id}");
        Ok(CourseResponse::new(updated, slots))
    }

    /// Deletes the course with its schedules and course-bound subscriptions;
    /// its lessons are kept without a course.
    pub async fn delete_course(&self, id: i64) -> AppResult<()> {
        let result = courses::Entity::delete_by_id(id).exec(&self.pool).await?;
        ensure_deleted(result.rows_affected, "Course", id)?;
        log::info!("Deleted course {id}");
        Ok(())
    }
}

async fn course_schedules<C: ConnectionTrait>(
    db: &C,
    course_id: i64,
) -> AppResult<Vec<schedules::Model>> {
    Ok(schedules::Entity::find()
        .filter(schedules::Column::CourseId.eq(course_id))
        .order_by_asc(schedules::Column::Id)
        .all(db)
        .await?)
}

async fn insert_schedule<C: ConnectionTrait>(
    db: &C,
    course_id: i64,
    row: &ScheduleRequest,
) -> AppResult<schedules::Model> {
    Ok(schedules::ActiveModel {
        course_id: Set(course_id),
        day_of_week: Set(row.day()?),
        start_time: Set(row.start_time),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory_pool;
    use crate::services::testing::{create_course, create_teacher};
    use chrono::NaiveTime;

    fn slot(id: Option<i64>, day: i32, h: u32) -> ScheduleRequest {
        ScheduleRequest {
            id,
            day_of_week: day,
            start_time: NaiveTime::from_hms_opt(h, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_course_with_inline_schedules() {
        let pool = memory_pool().await;
        let teacher_id = create_teacher(&pool, "anna").await;
        let service = CourseService::new(pool);

        let course = service
            .create_course(CourseRequest {
                name: "Йога".into(),
                description: String::new(),
                teacher_id,
                schedules: Some(vec![slot(None, 0, 10), slot(None, 0, 11)]),
            })
            .await
            .unwrap();

        assert_eq!(course.schedules.len(), 2);
        assert_eq!(course.display, "Йога, пн 10:00 (пн), 11:00 (пн)");
        assert_eq!(course.schedules[0].display, "Йога - Понедельник 10:00:00");
    }

    #[tokio::test]
    async fn test_update_syncs_schedule_rows() {
        let pool = memory_pool().await;
        let teacher_id = create_teacher(&pool, "anna").await;
        let service = CourseService::new(pool);
        let course = service
            .create_course(CourseRequest {
                name: "Бокс".into(),
                description: String::new(),
                teacher_id,
                schedules: Some(vec![slot(None, 0, 10), slot(None, 2, 10)]),
            })
            .await
            .unwrap();
        let monday = course.schedules[0].id;

        let updated = service
            .update_course(
                course.id,
                CourseRequest {
                    name: "Бокс".into(),
                    description: "Для взрослых".into(),
                    teacher_id,
                    schedules: Some(vec![slot(Some(monday), 0, 18), slot(None, 4, 19)]),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description, "Для взрослых");
        assert_eq!(updated.schedules.len(), 2);
        assert_eq!(updated.schedules[0].id, monday);
        assert_eq!(updated.display, "Бокс, пн, пт 18:00 (пн), 19:00 (пт)");

        // omitted table is left untouched
        let renamed = service
            .update_course(
                course.id,
                CourseRequest {
                    name: "Кикбоксинг".into(),
                    description: String::new(),
                    teacher_id,
                    schedules: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.schedules.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_inline_rows_roll_back() {
        let pool = memory_pool().await;
        let teacher_id = create_teacher(&pool, "anna").await;
        let course_id = create_course(&pool, teacher_id, "Танцы").await;
        let service = CourseService::new(pool);

        let foreign = service
            .update_course(
                course_id,
                CourseRequest {
                    name: "Танцы".into(),
                    description: String::new(),
                    teacher_id,
                    schedules: Some(vec![slot(Some(999), 1, 10)]),
                },
            )
            .await;
        assert!(matches!(foreign, Err(AppError::FieldError { .. })));

        let bad_day = service
            .create_course(CourseRequest {
                name: "Пилатес".into(),
                description: String::new(),
                teacher_id,
                schedules: Some(vec![slot(None, 7, 10)]),
            })
            .await;
        assert!(matches!(
            bad_day,
            Err(AppError::FieldError { ref field, .. }) if field == "day_of_week"
        ));

        let course = service.get_course(course_id).await.unwrap();
        assert_eq!(course.name, "Танцы");
        assert!(course.schedules.is_empty());
        assert_eq!(course.display, "Танцы,  ");
    }

    #[tokio::test]
    async fn test_unknown_teacher_is_a_field_error() {
        let service = CourseService::new(memory_pool().await);
        assert!(matches!(
            service
                .create_course(CourseRequest {
                    name: "Йога".into(),
                    description: String::new(),
                    teacher_id: 42,
                    schedules: None,
                })
                .await,
            Err(AppError::FieldError { ref field, .. }) if field == "teacher_id"
        ));
    }
}
