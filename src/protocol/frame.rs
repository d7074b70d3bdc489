use super::CodecError;
use super::Kind;
use super::Target;
use crate::HEADER_SIZE;
use crate::MAX_PAYLOAD;
use crate::Position;
use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

/// One datagram on the ring.
///
/// `kind | origin | dest | seq | length | payload`
///
/// Frames are immutable once built; seats that merely pass a frame along
/// retransmit the datagram they received rather than re-encoding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: Kind,
    pub origin: Position,
    pub dest: Target,
    pub seq: u8,
    pub payload: Bytes,
}

impl Frame {
    pub fn new(kind: Kind, origin: Position, dest: Target, seq: u8, payload: Bytes) -> Self {
        Self {
            kind,
            origin,
            dest,
            seq,
            payload,
        }
    }

    pub fn encode(&self) -> Result<Bytes, CodecError> {
        if self.payload.len() > MAX_PAYLOAD {
            return Err(CodecError::malformed(format!(
                "payload of {} bytes exceeds {}",
                self.payload.len(),
                MAX_PAYLOAD
            )));
        }
        let mut buf = BytesMut::with_capacity(HEADER_SIZE + self.payload.len());
        buf.put_u8(u8::from(self.kind));
        buf.put_u8(self.origin);
        buf.put_u8(u8::from(self.dest));
        buf.put_u8(self.seq);
        buf.put_u8(self.payload.len() as u8);
        buf.put_slice(&self.payload);
        Ok(buf.freeze())
    }

    /// Bytes past the declared length are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() < HEADER_SIZE {
            return Err(CodecError::malformed(format!(
                "truncated header: {} bytes",
                bytes.len()
            )));
        }
        let length = bytes[4] as usize;
        let body = &bytes[HEADER_SIZE..];
        if body.len() < length {
            return Err(CodecError::malformed(format!(
                "declared length {} exceeds {} available",
                length,
                body.len()
            )));
        }
        Ok(Self {
            kind: Kind::try_from(bytes[0])?,
            origin: super::target::seat(bytes[1])?,
            dest: Target::try_from(bytes[2])?,
            seq: bytes[3],
            payload: Bytes::copy_from_slice(&body[..length]),
        })
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} P{}→{} #{} ({}B)",
            self.kind,
            self.origin,
            self.dest,
            self.seq,
            self.payload.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::new(
            Kind::Play,
            2,
            Target::Broadcast,
            255,
            Bytes::from_static(&[0x3C]),
        )
    }

    #[test]
    fn header_layout() {
        let bytes = sample().encode().unwrap();
        assert_eq!(&bytes[..], &[6, 2, 0xFF, 255, 1, 0x3C]);
    }

    #[test]
    fn decode_inverts_encode() {
        let frame = sample();
        assert_eq!(Frame::decode(&frame.encode().unwrap()), Ok(frame));
        let empty = Frame::new(Kind::Start, 0, Target::Seat(3), 0, Bytes::new());
        assert_eq!(Frame::decode(&empty.encode().unwrap()), Ok(empty));
    }

    #[test]
    fn truncated_always_fails() {
        let bytes = sample().encode().unwrap();
        for n in 0..bytes.len() {
            assert!(matches!(
                Frame::decode(&bytes[..n]),
                Err(CodecError::MalformedFrame(_))
            ));
        }
    }

    #[test]
    fn trailing_bytes_ignored() {
        let mut bytes = sample().encode().unwrap().to_vec();
        bytes.extend_from_slice(&[0xAA, 0xBB]);
        assert_eq!(Frame::decode(&bytes), Ok(sample()));
    }

    #[test]
    fn rejects_bad_header_fields() {
        assert!(Frame::decode(&[0, 0, 0, 0, 0]).is_err());
        assert!(Frame::decode(&[10, 0, 0, 0, 0]).is_err());
        assert!(Frame::decode(&[1, 4, 0, 0, 0]).is_err());
        assert!(Frame::decode(&[1, 0xFF, 0, 0, 0]).is_err());
        assert!(Frame::decode(&[1, 0, 4, 0, 0]).is_err());
        assert!(Frame::decode(&[2, 0, 0xFF, 0, 0]).is_ok());
    }

    #[test]
    fn oversized_payload_fails() {
        let frame = Frame::new(
            Kind::Deal,
            0,
            Target::Seat(1),
            0,
            Bytes::from(vec![0u8; 256]),
        );
        assert!(frame.encode().is_err());
    }
}
