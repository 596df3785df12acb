// crates/job-search/src/domain/value_objects/job_attributes.rs

stable_enum! {
    JobLevel (field = "job_level") {
        Intern => "INTERN",
        Fresher => "FRESHER",
        Junior => "JUNIOR",
        Middle => "MIDDLE",
        Senior => "SENIOR",
        Lead => "LEAD",
        Manager => "MANAGER",
        Director => "DIRECTOR",
    }
}

stable_enum! {
    JobType (field = "job_type") {
        FullTime => "FULL_TIME",
        PartTime => "PART_TIME",
        Contract => "CONTRACT",
        Internship => "INTERNSHIP",
        Freelance => "FREELANCE",
        Remote => "REMOTE",
    }
}

stable_enum! {
    ExperienceLevel (field = "experience") {
        NoExperience => "NO_EXPERIENCE",
        LessThanOneYear => "LESS_THAN_ONE_YEAR",
        OneToThreeYears => "ONE_TO_THREE_YEARS",
        ThreeToFiveYears => "THREE_TO_FIVE_YEARS",
        MoreThanFiveYears => "MORE_THAN_FIVE_YEARS",
    }
}

stable_enum! {
    EducationLevel (field = "education") {
        NoDegree => "NONE",
        HighSchool => "HIGH_SCHOOL",
        College => "COLLEGE",
        Bachelor => "BACHELOR",
        Master => "MASTER",
        Doctorate => "DOCTORATE",
    }
}

stable_enum! {
    /// Forme de la rémunération affichée
    SalaryType (field = "salary_type") {
        Range => "RANGE",
        UpTo => "UP_TO",
        From => "FROM",
        Negotiable => "NEGOTIABLE",
    }
}

stable_enum! {
    /// Devise des montants min/max
    SalaryUnit (field = "salary_unit") {
        Vnd => "VND",
        Usd => "USD",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_is_lenient_on_case_and_separators() {
        assert_eq!(JobType::from_str("full-time").unwrap(), JobType::FullTime);
        assert_eq!(JobType::from_str(" Part Time ").unwrap(), JobType::PartTime);
        assert_eq!(SalaryUnit::from_str("usd").unwrap(), SalaryUnit::Usd);
    }

    #[test]
    fn test_unknown_value_is_a_validation_error_on_the_right_field() {
        let err = SalaryUnit::from_str("EURO").unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("salary_unit"));
    }

    #[test]
    fn test_serializes_as_stable_string_not_ordinal() {
        let json = serde_json::to_string(&ExperienceLevel::OneToThreeYears).unwrap();
        assert_eq!(json, "\"ONE_TO_THREE_YEARS\"");

        let back: JobLevel = serde_json::from_str("\"SENIOR\"").unwrap();
        assert_eq!(back, JobLevel::Senior);
    }

    #[test]
    fn test_every_variant_round_trips_through_its_string() {
        for level in EducationLevel::ALL {
            assert_eq!(&EducationLevel::from_str(level.as_str()).unwrap(), level);
        }
    }
}
