//! Enumerated answer codes.

use super::macros::coded_enum;

coded_enum! {
    Gender, "gender" {
        Male => ("1", "Male"),
        Female => ("0", "Female"),
    }
}

coded_enum! {
    ChestPainType, "chestPainType" {
        TypicalAngina => ("1", "Typical Angina"),
        AtypicalAngina => ("2", "Atypical Angina"),
        NonAnginalPain => ("3", "Non-Anginal Pain"),
        Asymptomatic => ("4", "Asymptomatic"),
    }
}

coded_enum! {
    /// Fasting blood sugar relative to 120 mg/dl.
    FastingBloodSugar, "fastingBloodSugar" {
        Normal => ("0", "Less than 120 mg/dl"),
        High => ("1", "Greater than 120 mg/dl"),
    }
}

coded_enum! {
    RestingEcg, "restingECG" {
        Normal => ("0", "Normal"),
        StTAbnormality => ("1", "ST-T Wave Abnormality"),
        LeftVentricularHypertrophy => ("2", "Left Ventricular Hypertrophy"),
    }
}

coded_enum! {
    ExerciseAngina, "exerciseAngina" {
        No => ("0", "No"),
        Yes => ("1", "Yes"),
    }
}

coded_enum! {
    /// Slope of the peak exercise ST segment.
    StSlope, "stSlope" {
        Upsloping => ("1", "Upsloping"),
        Flat => ("2", "Flat"),
        Downsloping => ("3", "Downsloping"),
    }
}

coded_enum! {
    /// Major vessels colored by fluoroscopy.
    MajorVessels, "majorVessels" {
        Zero => ("0", "0 vessels"),
        One => ("1", "1 vessel"),
        Two => ("2", "2 vessels"),
        Three => ("3", "3 vessels"),
    }
}

coded_enum! {
    /// Thallium stress test result.
    Thallium, "thallium" {
        Normal => ("3", "Normal"),
        FixedDefect => ("6", "Fixed Defect"),
        ReversibleDefect => ("7", "Reversible Defect"),
    }
}

impl MajorVessels {
    /// Number of vessels as an integer.
    pub fn count(&self) -> u8 {
        match self {
            MajorVessels::Zero => 0,
            MajorVessels::One => 1,
            MajorVessels::Two => 2,
            MajorVessels::Three => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn gender_codes_match_storage_format() {
        assert_eq!(Gender::from_code("1").unwrap(), Gender::Male);
        assert_eq!(Gender::from_code("0").unwrap(), Gender::Female);
        assert_eq!(Gender::Male.code(), "1");
    }

    #[test]
    fn thallium_codes_skip_unused_values() {
        assert_eq!(Thallium::from_code("3").unwrap(), Thallium::Normal);
        assert_eq!(Thallium::from_code("6").unwrap(), Thallium::FixedDefect);
        assert_eq!(Thallium::from_code("7").unwrap(), Thallium::ReversibleDefect);
        assert!(Thallium::from_code("4").is_err());
    }

    #[test]
    fn chest_pain_codes_start_at_one() {
        assert!(ChestPainType::from_code("0").is_err());
        assert_eq!(ChestPainType::from_code("4").unwrap(), ChestPainType::Asymptomatic);
    }

    #[test]
    fn unknown_code_names_the_field() {
        let err = RestingEcg::from_code("3").unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_format("restingECG", "unknown code '3'")
        );
    }

    #[test]
    fn every_option_round_trips_through_its_code() {
        for slope in StSlope::ALL {
            assert_eq!(StSlope::from_code(slope.code()).unwrap(), *slope);
        }
        for vessels in MajorVessels::ALL {
            assert_eq!(MajorVessels::from_code(vessels.code()).unwrap(), *vessels);
            assert_eq!(vessels.code(), vessels.count().to_string());
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(FastingBloodSugar::High.to_string(), "Greater than 120 mg/dl");
        assert_eq!(ExerciseAngina::Yes.to_string(), "Yes");
    }
}
