use crate::models::MOODS;

pub fn render_index() -> String {
    let options: String = MOODS
        .iter()
        .map(|mood| format!(r#"<option value="{mood}">{mood}</option>"#))
        .collect();
    INDEX_HTML.replace("{{MOOD_OPTIONS}}", &options)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Journal</title>
  <style>
    :root {
      --bg-1: #f3f0fa;
      --bg-2: #d9d2f0;
      --ink: #2b2a33;
      --accent: #6a4cff;
      --muted: #6b6874;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(60, 48, 120, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ece8f8 60%, #f8f7fc 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      flex-wrap: wrap;
      gap: 8px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    #datetime {
      color: var(--muted);
    }

    section {
      background: white;
      border-radius: 18px;
      padding: 20px;
      border: 1px solid rgba(60, 48, 120, 0.08);
    }

    select, textarea {
      font: inherit;
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid #d4d0e0;
    }

    textarea {
      width: 100%;
      min-height: 90px;
      margin: 12px 0;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 1rem;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    .section-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 8px;
      flex-wrap: wrap;
    }

    #emoji-timeline {
      display: flex;
      justify-content: center;
      gap: 10px;
      flex-wrap: wrap;
    }

    .point {
      display: flex;
      flex-direction: column;
      align-items: center;
    }

    .point .mood {
      font-size: 1.5rem;
    }

    .point .label {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .flashback {
      margin-bottom: 8px;
      padding: 10px;
      border-radius: 10px;
      background: #f6f5fa;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Journal</h1>
      <span id="datetime"></span>
    </header>

    <section>
      <h2>How are you today?</h2>
      <select id="mood">
        <option value="">Select a mood</option>
        {{MOOD_OPTIONS}}
      </select>
      <textarea id="notes" placeholder="Anything on your mind?"></textarea>
      <button id="submit-entry" type="button">Save entry</button>
    </section>

    <section>
      <div class="section-header">
        <h2>Trends</h2>
        <select id="trend-filter">
          <option value="last7">Past 7 entries</option>
          <option value="last14">Past 14 entries</option>
          <option value="monthly">Monthly average</option>
        </select>
      </div>
      <div id="emoji-timeline"></div>
    </section>

    <section>
      <div class="section-header">
        <h2>Flashbacks</h2>
        <div>
          <select id="flashback-mood-filter">
            <option value="all">All moods</option>
            {{MOOD_OPTIONS}}
          </select>
          <select id="flashback-limit">
            <option value="5">5</option>
            <option value="10">10</option>
            <option value="all">All</option>
          </select>
        </div>
      </div>
      <div id="journal-entries"></div>
    </section>
  </main>

  <script>
    const datetimeEl = document.getElementById('datetime');
    const moodEl = document.getElementById('mood');
    const notesEl = document.getElementById('notes');
    const submitEl = document.getElementById('submit-entry');
    const trendEl = document.getElementById('trend-filter');
    const timelineEl = document.getElementById('emoji-timeline');
    const flashMoodEl = document.getElementById('flashback-mood-filter');
    const flashLimitEl = document.getElementById('flashback-limit');
    const flashbackEl = document.getElementById('journal-entries');

    const updateClock = () => {
      datetimeEl.textContent = new Date().toLocaleString();
    };

    const fetchJson = async (url, options) => {
      const res = await fetch(url, options);
      const body = await res.json().catch(() => ({}));
      if (!res.ok) {
        throw new Error(body.error || `Request failed (${res.status})`);
      }
      return body;
    };

    const loadTimeline = async () => {
      try {
        const points = await fetchJson(`/api/timeline?mode=${encodeURIComponent(trendEl.value)}`);
        timelineEl.innerHTML = '';
        points.forEach((point) => {
          const wrapper = document.createElement('div');
          wrapper.className = 'point';
          const mood = document.createElement('div');
          mood.className = 'mood';
          mood.textContent = point.mood;
          const label = document.createElement('div');
          label.className = 'label';
          label.textContent = point.label;
          wrapper.append(mood, label);
          timelineEl.appendChild(wrapper);
        });
      } catch (err) {
        timelineEl.textContent = 'Error loading trends.';
        alert(err.message);
      }
    };

    const loadFlashback = async () => {
      try {
        const params = new URLSearchParams({ mood: flashMoodEl.value, limit: flashLimitEl.value });
        const items = await fetchJson(`/api/flashback?${params}`);
        flashbackEl.innerHTML = '';
        if (!items.length) {
          flashbackEl.textContent = 'No flashbacks found.';
          return;
        }
        items.forEach((item) => {
          const card = document.createElement('div');
          card.className = 'flashback';
          const head = document.createElement('div');
          head.textContent = `${item.mood} ${item.date}`;
          const body = document.createElement('div');
          body.textContent = item.notes;
          card.append(head, body);
          flashbackEl.appendChild(card);
        });
      } catch (err) {
        flashbackEl.textContent = 'Error loading flashbacks.';
        alert(err.message);
      }
    };

    const submitEntry = async () => {
      const mood = moodEl.value;
      const notes = notesEl.value.trim();
      if (!mood) {
        alert('Please select a mood before submitting.');
        return;
      }

      try {
        // Advisory only; the server re-checks.
        const existing = await fetchJson('/entries');
        const today = new Date().toISOString().slice(0, 10);
        if (existing.some((entry) => (entry.timestamp || '').slice(0, 10) === today)) {
          alert('You have already submitted an entry today.');
          return;
        }

        const saved = await fetchJson('/entry', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ mood, notes }),
        });
        alert(saved.message);
        moodEl.value = '';
        notesEl.value = '';
        loadTimeline();
        loadFlashback();
      } catch (err) {
        alert(err.message);
      }
    };

    submitEl.addEventListener('click', submitEntry);
    trendEl.addEventListener('change', loadTimeline);
    flashMoodEl.addEventListener('change', loadFlashback);
    flashLimitEl.addEventListener('change', loadFlashback);

    updateClock();
    setInterval(updateClock, 1000);
    loadTimeline();
    loadFlashback();
  </script>
</body>
</html>
"#;
