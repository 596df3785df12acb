#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use shared_kernel::clock::FixedClock;
    use shared_kernel::infrastructure::pagination::PageRequest;
    use std::sync::Arc;

    use crate::domain::search::fields;
    use crate::domain::search::query::{
        BoolQuery, FieldValue, JobQueryCompiler, MatchOperator, QueryNode, SortDirective, SortOrder, boosts,
    };
    use crate::domain::value_objects::{
        IndustryId, JobLevel, JobSort, SalaryFilter, SalaryUnit, SearchCriteria,
    };

    fn compiler() -> JobQueryCompiler {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        JobQueryCompiler::new(Arc::new(FixedClock(now)), JobQueryCompiler::DEFAULT_MIN_SCORE)
    }

    fn status_filter() -> QueryNode {
        QueryNode::Term {
            field: fields::STATUS,
            value: FieldValue::Keyword("APPROVED".into()),
            boost: None,
        }
    }

    fn as_bool(node: &QueryNode) -> &BoolQuery {
        match node {
            QueryNode::Bool(b) => b,
            other => panic!("Bool attendu, reçu {:?}", other),
        }
    }

    fn boost_of(node: &QueryNode) -> Option<f32> {
        match node {
            QueryNode::Term { boost, .. }
            | QueryNode::Match { boost, .. }
            | QueryNode::MatchPhrase { boost, .. }
            | QueryNode::MatchPhrasePrefix { boost, .. } => *boost,
            _ => None,
        }
    }

    #[test]
    fn test_blank_keyword_degenerates_to_pure_filtering() {
        let criteria = SearchCriteria {
            keyword: None,
            ..SearchCriteria::default()
        };

        let compiled = compiler().compile(&criteria);

        assert_eq!(compiled.query.filter, vec![status_filter()]);
        assert!(compiled.query.must.is_empty());
        assert!(compiled.query.should.is_empty());
        assert_eq!(compiled.min_score, None);
        assert_eq!(
            compiled.sort,
            vec![SortDirective { field: fields::SCORE, order: SortOrder::Desc }]
        );
    }

    #[test]
    fn test_punctuation_only_keyword_is_treated_as_blank() {
        let criteria = SearchCriteria {
            keyword: Some("?!".into()),
            ..SearchCriteria::default()
        };

        let compiled = compiler().compile(&criteria);

        assert!(compiled.query.must.is_empty());
        assert_eq!(compiled.min_score, None);
    }

    #[test]
    fn test_keyword_builds_title_and_company_groups_with_graduated_boosts() {
        let criteria = SearchCriteria {
            keyword: Some("Rust  Engineer!".into()),
            ..SearchCriteria::default()
        };

        let compiled = compiler().compile(&criteria);

        // Le statut reste un filtre, quel que soit le mot-clé
        assert_eq!(compiled.query.filter, vec![status_filter()]);
        assert_eq!(compiled.min_score, Some(JobQueryCompiler::DEFAULT_MIN_SCORE));

        assert_eq!(compiled.query.must.len(), 1);
        let admission = as_bool(&compiled.query.must[0]);
        assert_eq!(admission.minimum_should_match, Some(1));
        assert_eq!(admission.should.len(), 2);

        let title = as_bool(&admission.should[0]);
        assert_eq!(title.minimum_should_match, Some(1));
        assert_eq!(
            title.should[0],
            QueryNode::Term {
                field: fields::TITLE_RAW,
                value: FieldValue::Keyword("Rust  Engineer!".into()),
                boost: Some(boosts::TITLE_EXACT),
            }
        );
        assert_eq!(
            title.should[1],
            QueryNode::MatchPhrase {
                field: fields::TITLE,
                query: "rust engineer".into(),
                slop: 1,
                boost: Some(boosts::TITLE_PHRASE),
            }
        );
        assert_eq!(
            title.should[2],
            QueryNode::Match {
                field: fields::TITLE,
                query: "rust engineer".into(),
                operator: MatchOperator::And,
                fuzziness: Some(1),
                boost: Some(boosts::TITLE_FUZZY),
            }
        );

        let company = as_bool(&admission.should[1]);
        let company_boosts: Vec<_> = company.should.iter().map(boost_of).collect();
        assert_eq!(company_boosts, vec![Some(6.0), Some(5.0), Some(4.5)]);
    }

    #[test]
    fn test_description_and_requirement_only_add_score() {
        let criteria = SearchCriteria {
            keyword: Some("tokio".into()),
            ..SearchCriteria::default()
        };

        let compiled = compiler().compile(&criteria);

        assert_eq!(compiled.query.minimum_should_match, Some(0));
        let body_boosts: Vec<_> = compiled.query.should.iter().map(boost_of).collect();
        assert_eq!(body_boosts, vec![Some(1.0), Some(0.5), Some(1.0), Some(0.5)]);
        assert!(matches!(
            compiled.query.should[1],
            QueryNode::MatchPhrasePrefix { field: fields::DESCRIPTION, .. }
        ));
        assert!(matches!(
            compiled.query.should[2],
            QueryNode::Match { field: fields::REQUIREMENT, operator: MatchOperator::Or, .. }
        ));
    }

    #[test]
    fn test_facets_become_independent_terms_filters() {
        let criteria = SearchCriteria {
            industry_ids: vec![IndustryId::new_unchecked(3), IndustryId::new_unchecked(9)],
            job_levels: vec![JobLevel::Junior, JobLevel::Senior],
            ..SearchCriteria::default()
        };

        let compiled = compiler().compile(&criteria);

        assert_eq!(compiled.query.filter.len(), 3);
        assert_eq!(
            compiled.query.filter[1],
            QueryNode::Terms {
                field: fields::INDUSTRY_IDS,
                values: vec![FieldValue::Long(3), FieldValue::Long(9)],
            }
        );
        assert_eq!(
            compiled.query.filter[2],
            QueryNode::Terms {
                field: fields::JOB_LEVEL,
                values: vec!["JUNIOR".into(), "SENIOR".into()],
            }
        );
    }

    #[test]
    fn test_recency_window_is_computed_from_the_clock() {
        let criteria = SearchCriteria {
            posted_within_days: Some(7),
            ..SearchCriteria::default()
        };

        let compiled = compiler().compile(&criteria);

        let expected_since = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap() - Duration::days(7);
        assert_eq!(
            compiled.query.filter[1],
            QueryNode::Range {
                field: fields::CREATED_AT,
                gte: Some(FieldValue::Date(expected_since)),
                lte: None,
            }
        );

        let zero = SearchCriteria {
            posted_within_days: Some(0),
            ..SearchCriteria::default()
        };
        assert_eq!(compiler().compile(&zero).query.filter.len(), 1);
    }

    #[test]
    fn test_salary_filter_expresses_band_overlap() {
        let criteria = SearchCriteria {
            salary: Some(SalaryFilter::try_new(SalaryUnit::Usd, Some(1000.0), Some(3000.0)).unwrap()),
            ..SearchCriteria::default()
        };

        let compiled = compiler().compile(&criteria);

        assert_eq!(
            &compiled.query.filter[1..],
            &[
                QueryNode::Term {
                    field: fields::SALARY_UNIT,
                    value: "USD".into(),
                    boost: None,
                },
                QueryNode::Range {
                    field: fields::MAX_SALARY,
                    gte: Some(FieldValue::Double(1000.0)),
                    lte: None,
                },
                QueryNode::Range {
                    field: fields::MIN_SALARY,
                    gte: None,
                    lte: Some(FieldValue::Double(3000.0)),
                },
            ]
        );
    }

    #[test]
    fn test_sort_and_pagination() {
        let criteria = SearchCriteria {
            sort: JobSort::ExpirationDateAsc,
            page: PageRequest { page: 3, size: 10 },
            ..SearchCriteria::default()
        };

        let compiled = compiler().compile(&criteria);

        assert_eq!(
            compiled.sort,
            vec![SortDirective { field: fields::EXPIRATION_DATE, order: SortOrder::Asc }]
        );
        assert_eq!(compiled.from, 20);
        assert_eq!(compiled.size, 10);
    }
}
