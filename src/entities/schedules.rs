use chrono::NaiveTime;
use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum DayOfWeek {
    #[sea_orm(num_value = 0)]
    Monday,
    #[sea_orm(num_value = 1)]
    Tuesday,
    #[sea_orm(num_value = 2)]
    Wednesday,
    #[sea_orm(num_value = 3)]
    Thursday,
    #[sea_orm(num_value = 4)]
    Friday,
    #[sea_orm(num_value = 5)]
    Saturday,
    #[sea_orm(num_value = 6)]
    Sunday,
}

impl DayOfWeek {
    /// Monday is 0.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(DayOfWeek::Monday),
            1 => Some(DayOfWeek::Tuesday),
            2 => Some(DayOfWeek::Wednesday),
            3 => Some(DayOfWeek::Thursday),
            4 => Some(DayOfWeek::Friday),
            5 => Some(DayOfWeek::Saturday),
            6 => Some(DayOfWeek::Sunday),
            _ => None,
        }
    }

    pub fn index(self) -> i32 {
        self.to_value()
    }

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Понедельник",
            DayOfWeek::Tuesday => "Вторник",
            DayOfWeek::Wednesday => "Среда",
            DayOfWeek::Thursday => "Четверг",
            DayOfWeek::Friday => "Пятница",
            DayOfWeek::Saturday => "Суббота",
            DayOfWeek::Sunday => "Воскресенье",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "пн",
            DayOfWeek::Tuesday => "вт",
            DayOfWeek::Wednesday => "ср",
            DayOfWeek::Thursday => "чт",
            DayOfWeek::Friday => "пт",
            DayOfWeek::Saturday => "сб",
            DayOfWeek::Sunday => "вс",
        }
    }
}

/// One weekly recurring slot of a course.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn display_name(&self, course_name: &str) -> String {
        format!(
            "{} - {} {}",
            course_name,
            self.day_of_week.name(),
            self.start_time.format("%H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_week_index_round_trip() {
        assert_eq!(DayOfWeek::from_index(0), Some(DayOfWeek::Monday));
        assert_eq!(DayOfWeek::from_index(6), Some(DayOfWeek::Sunday));
        assert_eq!(DayOfWeek::from_index(7), None);
        assert_eq!(DayOfWeek::from_index(-1), None);
        assert_eq!(DayOfWeek::Friday.index(), 4);
    }

    #[test]
    fn test_schedule_display_name() {
        let schedule = Model {
            id: 1,
            course_id: 1,
            day_of_week: DayOfWeek::Wednesday,
            start_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        };
        assert_eq!(schedule.display_name("Йога"), "Йога - Среда 18:30:00");
    }
}
