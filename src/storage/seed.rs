//! Seed data written the first time a collection is found empty.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{Member, MemberStatus, MembershipType, Review, Trainer};

/// Which collections get seeded on first read.
///
/// Trainers are always seeded. Members and reviews start empty unless the
/// demo data set is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    #[default]
    TrainersOnly,
    Demo,
}

impl SeedMode {
    pub fn seeds_members(self) -> bool {
        matches!(self, SeedMode::Demo)
    }

    pub fn seeds_reviews(self) -> bool {
        matches!(self, SeedMode::Demo)
    }
}

impl std::fmt::Display for SeedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedMode::TrainersOnly => write!(f, "trainers_only"),
            SeedMode::Demo => write!(f, "demo"),
        }
    }
}

impl FromStr for SeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trainers_only" | "trainers-only" => Ok(SeedMode::TrainersOnly),
            "demo" => Ok(SeedMode::Demo),
            other => Err(format!("unknown seed mode: {other}")),
        }
    }
}

fn day(year: i32, month: u32, d: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// The six default trainers, all unrated.
pub fn default_trainers() -> Vec<Trainer> {
    vec![
        Trainer::new("1", "김철수", "근력 트레이닝", 8.0),
        Trainer::new("2", "이영희", "다이어트 & 체형관리", 5.0),
        Trainer::new("3", "박민수", "재활 운동 & 스포츠 트레이닝", 10.0),
        Trainer::new("4", "최지은", "요가 & 필라테스", 6.0),
        Trainer::new("5", "정대현", "크로스핏 & 기능성 운동", 4.0),
        Trainer::new("6", "한소영", "프리웨이트 & 바디빌딩", 7.0),
    ]
}

/// Demo members, each assigned to one of the default trainers.
pub fn demo_members() -> Vec<Member> {
    use MemberStatus::*;
    use MembershipType::*;

    let rows: [(&str, &str, &str, &str, DateTime<Utc>, &str, &str, MemberStatus, MembershipType); 12] = [
        ("1", "홍길동", "010-1234-5678", "hong@example.com", day(2024, 1, 15), "1", "김철수", Active, Monthly),
        ("2", "김영수", "010-2345-6789", "kim@example.com", day(2024, 2, 20), "2", "이영희", Active, Quarterly),
        ("3", "이민지", "010-3456-7890", "lee@example.com", day(2024, 3, 10), "3", "박민수", Active, Yearly),
        ("4", "박준호", "010-4567-8901", "park@example.com", day(2024, 1, 5), "1", "김철수", Active, Monthly),
        ("5", "최수진", "010-5678-9012", "choi@example.com", day(2024, 2, 28), "4", "최지은", Active, Quarterly),
        ("6", "정태영", "010-6789-0123", "jung@example.com", day(2023, 12, 15), "5", "정대현", Inactive, Monthly),
        ("7", "한미라", "010-7890-1234", "han@example.com", day(2024, 3, 1), "6", "한소영", Active, Yearly),
        ("8", "윤서연", "010-8901-2345", "yoon@example.com", day(2024, 1, 22), "2", "이영희", Active, Monthly),
        ("9", "강동원", "010-9012-3456", "kang@example.com", day(2023, 11, 10), "3", "박민수", Suspended, Quarterly),
        ("10", "송하늘", "010-0123-4567", "song@example.com", day(2024, 2, 14), "4", "최지은", Active, Monthly),
        ("11", "임재현", "010-1122-3344", "lim@example.com", day(2024, 3, 5), "5", "정대현", Active, Quarterly),
        ("12", "오지은", "010-2233-4455", "oh@example.com", day(2024, 1, 30), "6", "한소영", Active, Yearly),
    ];

    rows.into_iter()
        .map(
            |(id, name, phone, email, join_date, trainer_id, trainer_name, status, membership_type)| Member {
                id: id.to_string(),
                name: name.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
                join_date,
                trainer_id: trainer_id.to_string(),
                trainer_name: trainer_name.to_string(),
                status,
                membership_type,
            },
        )
        .collect()
}

/// Demo reviews written by the demo members.
pub fn demo_reviews() -> Vec<Review> {
    let rows: [(&str, &str, &str, &str, &str, u8, &str, DateTime<Utc>); 18] = [
        ("1", "1", "홍길동", "1", "김철수", 5, "정말 전문적이고 친절하세요! 운동 방법을 자세히 설명해주시고 동기부여도 잘 해주셔서 3개월 만에 체력이 많이 좋아졌습니다.", day(2024, 3, 10)),
        ("2", "2", "김영수", "2", "이영희", 5, "다이어트 목표로 시작했는데 생각보다 빠르게 효과가 나타났어요. 식단 관리도 함께 도와주셔서 감사합니다!", day(2024, 3, 5)),
        ("3", "3", "이민지", "3", "박민수", 4, "부상 후 재활 운동을 받고 있는데, 트레이너님이 부상 부위를 정확히 파악하고 안전하게 운동을 진행해주셔서 좋습니다.", day(2024, 3, 8)),
        ("4", "4", "박준호", "1", "김철수", 5, "근력 트레이닝 전문가세요! 올바른 자세를 정확히 잡아주시고, 매번 새로운 운동 루틴을 제공해주셔서 지루하지 않아요.", day(2024, 2, 28)),
        ("5", "5", "최수진", "4", "최지은", 4, "요가와 필라테스를 배우고 있는데, 몸의 균형과 유연성이 많이 좋아졌어요. 트레이너님이 정말 차분하고 친절하세요.", day(2024, 3, 12)),
        ("6", "7", "한미라", "6", "한소영", 5, "바디빌딩 목표로 시작했는데, 트레이너님이 정말 전문적이세요! 근육 발달과 자세 교정에 많은 도움이 되고 있습니다.", day(2024, 3, 15)),
        ("7", "8", "윤서연", "2", "이영희", 5, "체형 관리 목표로 시작했는데, 트레이너님이 개인별 맞춤 프로그램을 제공해주셔서 효과가 빠르게 나타나고 있어요!", day(2024, 3, 3)),
        ("8", "1", "홍길동", "1", "김철수", 4, "운동 강도 조절을 잘 해주시고, 피드백도 자세히 해주셔서 좋아요. 다만 시간 약속을 좀 더 정확히 지켜주시면 더 좋을 것 같아요.", day(2024, 2, 20)),
        ("9", "3", "이민지", "3", "박민수", 5, "스포츠 트레이닝 전문가세요! 운동 선수처럼 체계적으로 훈련할 수 있어서 만족합니다. 경기 성적도 많이 올랐어요!", day(2024, 2, 15)),
        ("10", "11", "임재현", "5", "정대현", 4, "크로스핏이 처음이었는데, 트레이너님이 차근차근 설명해주셔서 쉽게 적응할 수 있었어요. 운동이 재미있어졌습니다!", day(2024, 3, 18)),
        ("11", "12", "오지은", "6", "한소영", 5, "프리웨이트 트레이닝을 배우고 있는데, 자세 교정에 정말 신경써주세요. 안전하게 운동할 수 있어서 좋습니다.", day(2024, 3, 1)),
        ("12", "2", "김영수", "2", "이영희", 5, "식단 관리와 운동을 병행해서 진행하고 있는데, 목표 체중에 거의 도달했어요! 트레이너님 덕분입니다.", day(2024, 2, 25)),
        ("13", "4", "박준호", "1", "김철수", 5, "근력이 정말 많이 늘었어요! 벤치프레스 무게가 2배 이상 올랐습니다. 트레이너님의 체계적인 프로그램 덕분이에요.", day(2024, 1, 30)),
        ("14", "5", "최수진", "4", "최지은", 4, "요가 수업이 정말 좋아요. 스트레스 해소에도 도움이 되고 몸도 유연해졌습니다. 다만 수업 시간이 좀 더 길었으면 좋겠어요.", day(2024, 2, 10)),
        ("15", "7", "한미라", "6", "한소영", 5, "바디빌딩 대회 준비를 하고 있는데, 트레이너님이 정말 전문적으로 도와주세요. 대회에서 좋은 성적을 거둘 수 있을 것 같아요!", day(2024, 3, 20)),
        ("16", "10", "송하늘", "4", "최지은", 5, "필라테스로 코어 강화를 하고 있는데, 허리 통증이 많이 줄었어요. 트레이너님이 정확한 자세를 잡아주셔서 좋습니다.", day(2024, 3, 14)),
        ("17", "8", "윤서연", "2", "이영희", 4, "체형 교정에 도움이 많이 되고 있어요. 다만 운동 시간이 좀 더 유연했으면 좋겠습니다.", day(2024, 2, 18)),
        ("18", "1", "홍길동", "1", "김철수", 5, "근력 트레이닝 6개월째 받고 있는데, 체력과 근력이 정말 많이 향상되었어요. 트레이너님의 전문성에 감사드립니다!", day(2024, 1, 25)),
    ];

    rows.into_iter()
        .map(
            |(id, member_id, member_name, trainer_id, trainer_name, rating, comment, date)| Review {
                id: id.to_string(),
                member_id: member_id.to_string(),
                member_name: member_name.to_string(),
                trainer_id: trainer_id.to_string(),
                trainer_name: trainer_name.to_string(),
                rating,
                comment: comment.to_string(),
                date,
            },
        )
        .collect()
}
