use chrono::{DateTime, Duration, Utc};

use crate::models::{Availability, Priority, Task, TaskStatus, TeamMember};

/// Generates the demo task board shown to visitors who have not signed in.
/// Creation times are relative to `now`.
pub fn generate_mock_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let task = |id: &str,
                title: &str,
                description: &str,
                priority: Priority,
                status: TaskStatus,
                assignee: &str,
                age_days: i64,
                due_date: &str| Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        status,
        assignee: assignee.to_string(),
        created_at: now - Duration::days(age_days),
        due_date: due_date.to_string(),
    };

    vec![
        task(
            "1",
            "พัฒนา Dashboard หลัก",
            "สร้าง Dashboard สำหรับแสดงข้อมูล KPI และสถานะทีม",
            Priority::High,
            TaskStatus::InProgress,
            "สมชาย วิชาการ",
            2,
            "2025-06-20",
        ),
        task(
            "2",
            "ปรับปรุง API Backend",
            "เพิ่มฟังก์ชัน authentication และ authorization",
            Priority::Medium,
            TaskStatus::Pending,
            "สุภา เทคโนโลยี",
            1,
            "2025-06-25",
        ),
        task(
            "3",
            "ทดสอบระบบ",
            "ทดสอบ integration ทั้งระบบและ performance",
            Priority::High,
            TaskStatus::Completed,
            "วิชัย ทดสอบ",
            5,
            "2025-06-15",
        ),
    ]
}

/// Generates the demo team roster with workloads.
pub fn generate_mock_team() -> Vec<TeamMember> {
    let member = |id: &str,
                  name: &str,
                  role: &str,
                  avatar: &str,
                  status: Availability,
                  current_tasks: u32,
                  max_tasks: u32| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar.to_string(),
        status,
        current_tasks,
        max_tasks,
        workload_percentage: TeamMember::workload(current_tasks, max_tasks),
    };

    vec![
        member("1", "สมชาย วิชาการ", "Frontend Developer", "SC", Availability::Available, 3, 5),
        member("2", "สุภา เทคโนโลยี", "Backend Developer", "ST", Availability::Busy, 4, 5),
        member("3", "วิชัย ทดสอบ", "QA Engineer", "WT", Availability::Available, 2, 4),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_tasks_are_dated_relative_to_now() {
        let now = Utc.with_ymd_and_hms(2025, 6, 18, 12, 0, 0).unwrap();
        let tasks = generate_mock_tasks(now);

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].created_at, now - Duration::days(2));
        assert_eq!(tasks[2].status, TaskStatus::Completed);
        assert!(tasks.iter().all(|t| t.created_at < now));
    }

    #[test]
    fn test_team_workloads() {
        let team = generate_mock_team();
        let workloads: Vec<f64> = team.iter().map(|m| m.workload_percentage).collect();

        assert_eq!(workloads, vec![60.0, 80.0, 50.0]);
        assert_eq!(team[1].status, Availability::Busy);
    }

    #[test]
    fn test_workload_with_no_capacity() {
        assert_eq!(TeamMember::workload(3, 0), 0.0);
    }
}
