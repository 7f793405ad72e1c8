use attest_stark::Transcript;
use proptest::prelude::*;

proptest! {
    #[test]
    fn identical_sequences_agree(
        messages in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..32), 1..10usize),
        bound in 1usize..1024
    ) {
        let mut a = Transcript::new();
        let mut b = Transcript::new();
        for message in &messages {
            a.absorb(message);
            b.absorb(message);
        }
        prop_assert_eq!(a.squeeze_field(), b.squeeze_field());
        prop_assert_eq!(a.squeeze_index(bound).unwrap(), b.squeeze_index(bound).unwrap());
    }

    // Avalanche: a single flipped bit anywhere in the absorbed sequence
    // changes every subsequent challenge.
    #[test]
    fn one_bit_flip_diverges_all_outputs(
        messages in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..32), 1..10usize),
        message_pick in any::<prop::sample::Index>(),
        byte_pick in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let mut mutated = messages.clone();
        let which = message_pick.index(mutated.len());
        let byte = byte_pick.index(mutated[which].len());
        mutated[which][byte] ^= 1 << bit;

        let mut a = Transcript::new();
        let mut b = Transcript::new();
        for message in &messages {
            a.absorb(message);
        }
        for message in &mutated {
            b.absorb(message);
        }

        prop_assert_ne!(a.state(), b.state());
        for _ in 0..4 {
            prop_assert_ne!(a.squeeze_field(), b.squeeze_field());
        }
    }

    #[test]
    fn extra_absorb_is_a_protocol_violation(
        messages in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..32), 1..8usize)
    ) {
        let mut a = Transcript::new();
        let mut b = Transcript::new();
        for message in &messages {
            a.absorb(message);
            b.absorb(message);
        }
        b.absorb(&[0u8]);
        prop_assert_ne!(a.squeeze_field(), b.squeeze_field());
    }
}

#[test]
fn labels_separate_protocol_phases() {
    let mut a = Transcript::new();
    let mut b = Transcript::new();
    a.absorb_label("composition-commitment");
    b.absorb_label("fri-fold-0");
    assert_ne!(a.squeeze_field(), b.squeeze_field());
}
