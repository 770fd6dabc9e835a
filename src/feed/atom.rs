use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::constants::ATOM_NAMESPACE;
use crate::feed::{AtomEntry, AtomFeed};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>https://forum.example.com</id>
  <title>Example forum</title>
  <updated>2024-01-02T03:04:05.123456+00:00</updated>
  <generator version="0.1.0">discourse-search-atom</generator>
  <entry>
    <id>https://forum.example.com/t/5/3</id>
    <title>Hello World [3]</title>
    <updated>2024-01-02T03:04:05.123456+00:00</updated>
    <content>alice: first line of the post</content>
    <link href="https://forum.example.com/t/5/3" rel="alternate"/>
  </entry>
</feed>
*/

pub(crate) fn write_feed(feed: &AtomFeed) -> quick_xml::Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
    writer.write_event(decl)?;

    let mut root = BytesStart::new("feed");
    root.push_attribute(("xmlns", ATOM_NAMESPACE));
    writer.write_event(Event::Start(root))?;

    push_text(&mut writer, "id", &feed.id)?;
    push_text(&mut writer, "title", &feed.title)?;
    if let Some(updated) = feed.updated {
        push_text(&mut writer, "updated", &updated.to_rfc3339())?;
    }

    let mut generator = BytesStart::new("generator");
    generator.push_attribute(("version", env!("CARGO_PKG_VERSION")));
    writer.write_event(Event::Start(generator))?;
    writer.write_event(Event::Text(BytesText::new(env!("CARGO_PKG_NAME"))))?;
    writer.write_event(Event::End(BytesEnd::new("generator")))?;

    for entry in &feed.entries {
        write_entry(&mut writer, entry)?;
    }

    writer.write_event(Event::End(BytesEnd::new("feed")))?;

    let mut bytes = writer.into_inner().into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_entry(writer: &mut XmlWriter, entry: &AtomEntry) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("entry")))?;

    push_text(writer, "id", &entry.id)?;
    push_text(writer, "title", &entry.title)?;
    push_text(writer, "updated", &entry.updated.to_rfc3339())?;
    push_text(writer, "content", &entry.content)?;

    let mut link = BytesStart::new("link");
    link.push_attribute(("href", entry.link.as_str()));
    link.push_attribute(("rel", "alternate"));
    writer.write_event(Event::Empty(link))?;

    writer.write_event(Event::End(BytesEnd::new("entry")))?;
    Ok(())
}

fn push_text(writer: &mut XmlWriter, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
