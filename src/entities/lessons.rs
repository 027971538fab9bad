use chrono::{NaiveDate, NaiveTime};
use sea_orm::entity::prelude::*;

/// One concrete dated session. Course and teacher survive as `NULL` when
/// the referenced rows are deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: Option<i64>,
    pub lesson_date: NaiveDate,
    pub lesson_time: NaiveTime,
    pub teacher_id: Option<i64>,
    pub is_conducted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "SetNull"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::TeacherId",
        to = "super::profiles::Column::Id",
        on_delete = "SetNull"
    )]
    Teacher,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        super::lesson_clients::Relation::Client.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::lesson_clients::Relation::Lesson.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn display_name(&self, course_name: Option<&str>) -> String {
        let when = format!(
            "{} - {}",
            self.lesson_date.format("%Y-%m-%d"),
            self.lesson_time.format("%H:%M:%S")
        );
        match course_name {
            Some(name) => format!("{name}, {when}"),
            None => when,
        }
    }
}
