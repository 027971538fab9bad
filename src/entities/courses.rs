use sea_orm::entity::prelude::*;

use super::schedules;

/// A class offering ("направление") taught by one profile.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::TeacherId",
        to = "super::profiles::Column::Id",
        on_delete = "Cascade"
    )]
    Teacher,
    #[sea_orm(has_many = "super::schedules::Entity")]
    Schedules,
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::schedules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Course name followed by its weekly timetable, e.g.
    /// `"Йога, пн, ср 10:00 (пн), 19:00 (ср)"`.
    ///
    /// Times are grouped by weekday in the order the days are first seen in
    /// `schedules`. Without schedules both lists are empty: `"Йога,  "`.
    pub fn summary(&self, schedules: &[schedules::Model]) -> String {
        let mut days: Vec<(&'static str, Vec<String>)> = Vec::new();
        for schedule in schedules {
            let day = schedule.day_of_week.abbreviation();
            let time = schedule.start_time.format("%H:%M").to_string();
            match days.iter_mut().find(|(d, _)| *d == day) {
                Some((_, times)) => times.push(time),
                None => days.push((day, vec![time])),
            }
        }

        let days_str = days
            .iter()
            .map(|(day, _)| *day)
            .collect::<Vec<_>>()
            .join(", ");
        let times_str = days
            .iter()
            .flat_map(|(day, times)| times.iter().map(move |t| format!("{t} ({day})")))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{}, {} {}", self.name, days_str, times_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::DayOfWeek;
    use chrono::NaiveTime;

    fn course(name: &str) -> Model {
        Model {
            id: 1,
            name: name.to_string(),
            teacher_id: 1,
            description: String::new(),
        }
    }

    fn slot(id: i64, day: DayOfWeek, h: u32, m: u32) -> schedules::Model {
        schedules::Model {
            id,
            course_id: 1,
            day_of_week: day,
            start_time: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
        }
    }

    #[test]
    fn test_summary_groups_times_under_one_day() {
        let schedules = vec![
            slot(1, DayOfWeek::Monday, 10, 0),
            slot(2, DayOfWeek::Monday, 11, 0),
        ];
        assert_eq!(
            course("Йога").summary(&schedules),
            "Йога, пн 10:00 (пн), 11:00 (пн)"
        );
    }

    #[test]
    fn test_summary_keeps_first_seen_day_order() {
        let schedules = vec![
            slot(1, DayOfWeek::Friday, 19, 0),
            slot(2, DayOfWeek::Monday, 9, 30),
            slot(3, DayOfWeek::Friday, 20, 15),
        ];
        assert_eq!(
            course("Бокс").summary(&schedules),
            "Бокс, пт, пн 19:00 (пт), 20:15 (пт), 09:30 (пн)"
        );
    }

    #[test]
    fn test_summary_without_schedules_keeps_empty_lists() {
        assert_eq!(course("Растяжка").summary(&[]), "Растяжка,  ");
    }
}
