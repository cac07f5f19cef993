use eui_primitives::{Eui, EuiError, EuiPrefix, EuiRange, EuiSet, Version, split_iab_mac};
use proptest::prelude::*;

fn eui48() -> impl Strategy<Value = Eui> {
    (0u64..=Version::Eui48.max_value()).prop_map(Eui::new)
}

fn any_eui() -> impl Strategy<Value = Eui> {
    prop_oneof![
        eui48(),
        any::<u64>().prop_map(|v| Eui::with_version(v, Version::Eui64).unwrap()),
    ]
}

fn small_range() -> impl Strategy<Value = EuiRange> {
    (0u64..1 << 47, 1u64..300).prop_map(|(start, len)| EuiRange::new(start, start + len - 1).unwrap())
}

fn small_set() -> impl Strategy<Value = EuiSet> {
    proptest::collection::vec(0u64..64, 0..32)
        .prop_map(|values| values.into_iter().map(Eui::new).collect())
}

proptest! {
    #[test]
    fn format_parse_round_trip(eui in eui48()) {
        prop_assert_eq!(eui.to_string().parse::<Eui>().unwrap(), eui);
    }

    #[test]
    fn eui64_promotion_is_idempotent(eui in any_eui()) {
        let once = eui.eui64();
        prop_assert_eq!(once.eui64(), once);
        prop_assert_eq!(once.eui64().value(), once.value());
    }

    #[test]
    fn symmetric_indexing(range in small_range(), i in 0u64..300) {
        let size = range.size() as i128;
        let i = i128::from(i) % size;
        prop_assert_eq!(range.get(i).unwrap(), range.get(-(size - i)).unwrap());
    }

    #[test]
    fn set_algebra_identities(s in small_set()) {
        prop_assert_eq!(s.union(&s), s.clone());
        prop_assert_eq!(s.intersection(&s), s.clone());
        prop_assert!(s.difference(&s).is_empty());
        prop_assert!(s.is_subset(&s));
    }

    #[test]
    fn set_from_range_is_contiguous(range in small_range()) {
        let s = EuiSet::from(range);
        prop_assert!(s.is_contiguous());
        prop_assert_eq!(s.euirange().unwrap(), Some(range));
    }

    #[test]
    fn set_iteration_is_sorted(s in small_set()) {
        let members: Vec<Eui> = s.iter().collect();
        prop_assert!(members.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(members.len(), s.len());
    }

    #[test]
    fn random_sample_is_distinct_subset(s in small_set(), n in 0usize..40) {
        match s.random_sample(n) {
            Ok(sample) => {
                prop_assert_eq!(sample.len(), n);
                let sampled: EuiSet = sample.into_iter().collect();
                prop_assert_eq!(sampled.len(), n);
                prop_assert!(sampled.is_subset(&s));
            }
            Err(err) => {
                prop_assert!(n > s.len());
                prop_assert!(matches!(err, EuiError::Value(_)));
            }
        }
    }

    #[test]
    fn prefix_bounds_are_padded(nibbles in "[0-9A-F]{1,12}") {
        let text = nibbles
            .as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).into_owned())
            .collect::<Vec<_>>()
            .join(":");
        let prefix: EuiPrefix = text.parse().unwrap();
        prop_assert_eq!(prefix.prefixlen() as usize, nibbles.len() * 4);
        prop_assert_eq!(prefix.size(), 1u128 << (48 - prefix.prefixlen()));
        prop_assert_eq!(u128::from(prefix.last() - prefix.first()) + 1, prefix.size());
        prop_assert_eq!(prefix.to_string(), text);
    }
}

#[test]
fn single_address_range() {
    let r = EuiRange::new(Eui::new(0), Eui::new(0)).unwrap();
    assert_eq!(r.size(), 1);
}

#[test]
fn ten_digit_prefix() {
    let p: EuiPrefix = "00:00:00:00:00".parse().unwrap();
    assert_eq!(p.prefixlen(), 40);
    assert_eq!(p.size(), 256);
}

#[test]
fn iab_split() {
    assert_eq!(split_iab_mac(0x0050_C2AB_C123, false), Ok((0x0050_C2AB_C, 0x123)));
    assert!(split_iab_mac(0x0050_C2AB_C123, true).is_err());
}

#[test]
fn oui_is_top_24_bits() {
    let eui: Eui = "00-1B-77-49-54-FD".parse().unwrap();
    assert_eq!(eui.oui_value(), 0x001B77);
}

#[test]
fn prefix_first_and_last() {
    let p: EuiPrefix = "AA:AA:AA:A".parse().unwrap();
    assert_eq!(p.eui(), "AA:AA:AA:A0:00:00".parse::<Eui>().unwrap());
    assert_eq!(p.last(), "AA:AA:AA:AF:FF:FF".parse::<Eui>().unwrap().value());
}

#[test]
fn set_with_hole_is_not_contiguous() {
    let full: EuiSet = (0..3).map(Eui::new).collect();
    let hole: EuiSet = [Eui::new(1)].into_iter().collect();
    let remaining = &full - &hole;
    assert!(!remaining.is_contiguous());
    assert!(matches!(remaining.euirange(), Err(EuiError::Value(_))));
}
