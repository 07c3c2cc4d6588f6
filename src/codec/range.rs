use super::alphabet;
use crate::Token;
use crate::cards::range::Range;
use crate::error::Error;

/// Spell a range as a share token. Every range of the 169-hand universe
/// packs to 22 bytes and therefore to exactly 30 characters, the empty
/// range spelling as thirty 'A's.
pub fn encode_range(range: &Range) -> Token {
    alphabet::encode(&<[u8; Range::BYTES]>::from(*range))
}

/// Read a range back out of a share token. Strict on both layers: the text
/// must be a canonical alphabet spelling, and it must unpack to exactly the
/// 22 bytes a range occupies.
pub fn decode_range(text: &str) -> Result<Range, Error> {
    let bytes = alphabet::decode(text)?;
    let bytes: [u8; Range::BYTES] = bytes
        .try_into()
        .map_err(|_| Error::MalformedToken("range token must pack to 22 bytes"))?;
    Ok(Range::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::hand::Hand;

    #[test]
    fn bijective_token() {
        for _ in 0..32 {
            let range = Range::random();
            assert_eq!(decode_range(&encode_range(&range)).unwrap(), range);
        }
    }

    #[test]
    fn tokens_are_thirty_characters() {
        assert_eq!(encode_range(&Range::empty()).len(), 30);
        assert_eq!(encode_range(&Range::full()).len(), 30);
        assert_eq!(encode_range(&Range::random()).len(), 30);
    }

    #[test]
    fn empty_spells_all_a() {
        assert_eq!(encode_range(&Range::empty()), "A".repeat(30));
        assert_eq!(decode_range(&"A".repeat(30)).unwrap(), Range::empty());
    }

    #[test]
    fn full_spelling() {
        assert_eq!(encode_range(&Range::full()), format!("{}AQ", "_".repeat(28)));
    }

    #[test]
    fn endpoint_tokens() {
        let aa = Range::from(Hand::try_from("AA").unwrap());
        let dd = Range::from(Hand::try_from("22").unwrap());
        assert_eq!(encode_range(&aa), format!("AQ{}", "A".repeat(28)));
        assert_eq!(encode_range(&dd), format!("{}AQ", "A".repeat(28)));
    }

    #[test]
    fn insertion_order_is_invisible() {
        let forward = ["AA", "KQs", "T9o", "55"];
        let mut a = Range::empty();
        let mut b = Range::empty();
        for id in forward {
            a.insert(Hand::try_from(id).unwrap());
        }
        for id in forward.iter().rev() {
            b.insert(Hand::try_from(*id).unwrap());
        }
        assert_eq!(encode_range(&a), encode_range(&b));
    }

    #[test]
    fn rejects_truncation() {
        let mut token = encode_range(&Range::random());
        token.pop();
        assert!(matches!(decode_range(&token), Err(Error::MalformedToken(_))));
    }

    #[test]
    fn rejects_extension() {
        let token = format!("{}AA", encode_range(&Range::random()));
        assert_eq!(
            decode_range(&token),
            Err(Error::MalformedToken("range token must pack to 22 bytes"))
        );
    }

    #[test]
    fn rejects_corruption() {
        let mut token = encode_range(&Range::full());
        token.pop();
        token.push('B');
        assert_eq!(decode_range(&token), Err(Error::MalformedToken("nonzero spare bits")));
        let mut token = encode_range(&Range::full());
        token.pop();
        token.push('!');
        assert_eq!(
            decode_range(&token),
            Err(Error::MalformedToken("character outside the url-safe alphabet"))
        );
    }
}
