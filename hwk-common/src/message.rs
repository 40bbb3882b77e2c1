use crate::Result;
use bytes::BytesMut;
use prost::Message;

pub fn encode_message(msg: impl Message) -> Result<Vec<u8>> {
    let mut buf = BytesMut::with_capacity(msg.encoded_len());
    msg.encode(&mut buf)?;
    Ok(buf.to_vec())
}

pub fn decode_message<T: Message + Default>(data: &[u8]) -> Result<T> {
    let msg = T::decode(data)?;
    Ok(msg)
}
