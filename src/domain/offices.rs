use crate::domain::model::EducationOffice;

/// 시도교육청 목록 (NEIS 시도교육청코드 기준)
pub const EDUCATION_OFFICES: &[EducationOffice] = &[
    EducationOffice { code: "B10", name: "서울특별시교육청" },
    EducationOffice { code: "C10", name: "부산광역시교육청" },
    EducationOffice { code: "D10", name: "대구광역시교육청" },
    EducationOffice { code: "E10", name: "인천광역시교육청" },
    EducationOffice { code: "F10", name: "광주광역시교육청" },
    EducationOffice { code: "G10", name: "대전광역시교육청" },
    EducationOffice { code: "H10", name: "울산광역시교육청" },
    EducationOffice { code: "I10", name: "세종특별자치시교육청" },
    EducationOffice { code: "J10", name: "경기도교육청" },
    EducationOffice { code: "K10", name: "강원도교육청" },
    EducationOffice { code: "M10", name: "충청북도교육청" },
    EducationOffice { code: "N10", name: "충청남도교육청" },
    EducationOffice { code: "P10", name: "전라북도교육청" },
    EducationOffice { code: "Q10", name: "전라남도교육청" },
    EducationOffice { code: "R10", name: "경상북도교육청" },
    EducationOffice { code: "S10", name: "경상남도교육청" },
    EducationOffice { code: "T10", name: "제주특별자치도교육청" },
];

pub fn find_office(code: &str) -> Option<&'static EducationOffice> {
    let code = code.trim();
    EDUCATION_OFFICES
        .iter()
        .find(|office| office.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_office_table() {
        assert_eq!(EDUCATION_OFFICES.len(), 17);
        assert_eq!(EDUCATION_OFFICES[0].code, "B10");
        assert_eq!(EDUCATION_OFFICES[16].name, "제주특별자치도교육청");

        let codes: HashSet<_> = EDUCATION_OFFICES.iter().map(|o| o.code).collect();
        assert_eq!(codes.len(), EDUCATION_OFFICES.len());
        assert!(EDUCATION_OFFICES.iter().all(|o| o.code.len() == 3));
    }

    #[test]
    fn test_find_office() {
        assert_eq!(find_office("J10").unwrap().name, "경기도교육청");
        assert_eq!(find_office(" s10 ").unwrap().code, "S10");
        assert!(find_office("L10").is_none());
    }
}
