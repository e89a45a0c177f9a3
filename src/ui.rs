use chrono::NaiveDate;

pub fn render_index(
    date: NaiveDate,
    open_tasks: usize,
    routines_done: usize,
    active_goals: usize,
) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &date.to_string())
        .replace("{{OPEN_TASKS}}", &open_tasks.to_string())
        .replace("{{ROUTINES_DONE}}", &routines_done.to_string())
        .replace("{{ACTIVE_GOALS}}", &active_goals.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Productivity Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .offline-banner {
      display: none;
      background: #fff3cd;
      border: 1px solid #e8d28a;
      border-radius: 14px;
      padding: 12px 16px;
      color: #7a5b00;
      font-size: 0.95rem;
    }

    .offline-banner.visible {
      display: block;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .pane {
      display: none;
      grid-template-columns: 1fr;
      gap: 18px;
    }

    .pane.active {
      display: grid;
    }

    form.editor {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
    }

    input, textarea, select {
      font: inherit;
      border: 1px solid rgba(47, 72, 88, 0.25);
      border-radius: 10px;
      padding: 10px 12px;
      background: #fdfcf9;
    }

    textarea {
      resize: vertical;
      min-height: 60px;
    }

    .editor-row {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .editor-row > * {
      flex: 1;
      min-width: 140px;
    }

    button.primary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      justify-self: start;
    }

    button.primary:active {
      transform: scale(0.98);
    }

    ul.records {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    li.record {
      background: white;
      border-radius: 16px;
      padding: 14px 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    li.record .row {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    li.record .title {
      font-weight: 600;
      font-size: 1.05rem;
    }

    li.record .title.done {
      text-decoration: line-through;
      color: #8b857d;
    }

    li.record .meta {
      color: #7a746d;
      font-size: 0.85rem;
    }

    .badge {
      display: inline-block;
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 0.78rem;
      font-weight: 600;
      background: rgba(47, 72, 88, 0.1);
      color: var(--accent-2);
    }

    .badge.high { background: rgba(255, 107, 74, 0.18); color: #b43a1d; }
    .badge.low { background: rgba(45, 122, 75, 0.15); color: #2d7a4b; }

    .record-actions {
      display: flex;
      gap: 8px;
    }

    .record-actions button {
      border: none;
      border-radius: 999px;
      padding: 6px 14px;
      font-size: 0.85rem;
      font-weight: 600;
      cursor: pointer;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .record-actions button.danger {
      background: rgba(198, 59, 43, 0.12);
      color: #c63b2b;
    }

    .progress-track {
      height: 8px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.1);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
    }

    .week-dots {
      display: flex;
      gap: 6px;
    }

    .week-dot {
      width: 22px;
      height: 22px;
      border-radius: 50%;
      border: none;
      cursor: pointer;
      background: rgba(47, 72, 88, 0.12);
    }

    .week-dot.done {
      background: var(--accent);
    }

    .report-card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .report-card h3 {
      margin: 0;
    }

    .report-card .insight {
      background: rgba(47, 72, 88, 0.06);
      border-radius: 12px;
      padding: 10px 14px;
      font-size: 0.95rem;
    }

    .report-controls {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 10px;
    }

    .report-controls a {
      color: var(--accent-2);
      font-weight: 600;
      font-size: 0.9rem;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .empty {
      color: #8b857d;
      font-size: 0.95rem;
      padding: 8px 2px;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Productivity Tracker</h1>
      <p class="subtitle">Tasks, notes, goals and routines for {{DATE}}.</p>
    </header>

    <div class="offline-banner" id="offline-banner">
      Offline - showing cached data. Changes are disabled until the server is reachable again.
    </div>

    <section class="panel">
      <div class="stat">
        <span class="label">Date</span>
        <span class="value" id="stat-date">{{DATE}}</span>
      </div>
      <div class="stat">
        <span class="label">Open tasks</span>
        <span class="value" id="stat-open-tasks">{{OPEN_TASKS}}</span>
      </div>
      <div class="stat">
        <span class="label">Routines done today</span>
        <span class="value" id="stat-routines-done">{{ROUTINES_DONE}}</span>
      </div>
      <div class="stat">
        <span class="label">Active goals</span>
        <span class="value" id="stat-active-goals">{{ACTIVE_GOALS}}</span>
      </div>
    </section>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="tasks" role="tab">Tasks</button>
      <button class="tab" type="button" data-tab="notes" role="tab">Notes</button>
      <button class="tab" type="button" data-tab="goals" role="tab">Goals</button>
      <button class="tab" type="button" data-tab="routines" role="tab">Routines</button>
      <button class="tab" type="button" data-tab="reports" role="tab">Reports</button>
    </div>

    <section class="pane active" id="pane-tasks">
      <form class="editor" id="task-form">
        <input name="title" placeholder="Task title" required />
        <textarea name="description" placeholder="Description (optional)"></textarea>
        <div class="editor-row">
          <input name="deadline" type="date" />
          <select name="priority">
            <option value="low">Low</option>
            <option value="medium" selected>Medium</option>
            <option value="high">High</option>
          </select>
        </div>
        <button class="primary" type="submit">Add task</button>
      </form>
      <ul class="records" id="task-list"></ul>
    </section>

    <section class="pane" id="pane-notes">
      <form class="editor" id="note-form">
        <input name="title" placeholder="Note title" required />
        <textarea name="content" placeholder="Write something..." required></textarea>
        <input name="tags" placeholder="Tags, comma separated" />
        <button class="primary" type="submit">Add note</button>
      </form>
      <ul class="records" id="note-list"></ul>
    </section>

    <section class="pane" id="pane-goals">
      <form class="editor" id="goal-form">
        <input name="title" placeholder="Goal title" required />
        <textarea name="description" placeholder="Description (optional)"></textarea>
        <div class="editor-row">
          <select name="period">
            <option value="weekly">Weekly</option>
            <option value="monthly" selected>Monthly</option>
            <option value="custom">Custom</option>
          </select>
          <input name="target_date" type="date" />
        </div>
        <textarea name="milestones" placeholder="Milestones, one per line"></textarea>
        <button class="primary" type="submit">Add goal</button>
      </form>
      <ul class="records" id="goal-list"></ul>
    </section>

    <section class="pane" id="pane-routines">
      <form class="editor" id="routine-form">
        <input name="title" placeholder="Routine title" required />
        <div class="editor-row">
          <input name="start_time" placeholder="Start (HH:MM)" />
          <input name="end_time" placeholder="End (HH:MM)" />
          <select name="category">
            <option value="health">Health</option>
            <option value="fitness">Fitness</option>
            <option value="work">Work</option>
            <option value="learning">Learning</option>
            <option value="mindfulness">Mindfulness</option>
            <option value="personal">Personal</option>
            <option value="other" selected>Other</option>
          </select>
        </div>
        <button class="primary" type="submit">Add routine</button>
      </form>
      <ul class="records" id="routine-list"></ul>
    </section>

    <section class="pane" id="pane-reports">
      <div class="report-controls">
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-report="daily">Daily</button>
          <button class="tab" type="button" data-report="weekly">Weekly</button>
          <button class="tab" type="button" data-report="monthly">Monthly</button>
        </div>
        <a id="report-download" href="/api/reports/daily?format=markdown" download>Download markdown</a>
      </div>
      <div class="report-card" id="report-card">
        <p class="empty">Loading report...</p>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const CACHE_PREFIX = 'productivity_app_';
    const CACHE_KEYS = {
      tasks: CACHE_PREFIX + 'tasks',
      notes: CACHE_PREFIX + 'notes',
      goals: CACHE_PREFIX + 'goals',
      routines: CACHE_PREFIX + 'routines'
    };
    const COMPLETION_CACHE_DAYS = 30;

    const statusEl = document.getElementById('status');
    const offlineBanner = document.getElementById('offline-banner');
    const tabs = Array.from(document.querySelectorAll('.tabs .tab[data-tab]'));
    const reportTabs = Array.from(document.querySelectorAll('.tab[data-report]'));
    const reportDownload = document.getElementById('report-download');

    let offline = false;
    let activeReport = 'daily';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const setOffline = (value) => {
      offline = value;
      offlineBanner.classList.toggle('visible', value);
    };

    const dateKey = (date) => {
      const month = String(date.getMonth() + 1).padStart(2, '0');
      const day = String(date.getDate()).padStart(2, '0');
      return `${date.getFullYear()}-${month}-${day}`;
    };

    const todayKey = () => dateKey(new Date());

    // Cached completion maps keep a 30-day rolling window so localStorage
    // never grows without bound.
    const pruneCompletions = (routines) => {
      const cutoff = new Date();
      cutoff.setDate(cutoff.getDate() - COMPLETION_CACHE_DAYS);
      const cutoffKey = dateKey(cutoff);
      return routines.map((routine) => {
        const pruned = {};
        for (const [day, done] of Object.entries(routine.completions || {})) {
          if (day >= cutoffKey) {
            pruned[day] = done;
          }
        }
        return { ...routine, completions: pruned };
      });
    };

    const writeCache = (key, records) => {
      try {
        localStorage.setItem(key, JSON.stringify(records));
      } catch (err) {
        // Quota or private-mode failure; the cache is best-effort.
      }
    };

    const readCache = (key) => {
      try {
        const raw = localStorage.getItem(key);
        return raw ? JSON.parse(raw) : [];
      } catch (err) {
        return [];
      }
    };

    const fetchCollection = async (name) => {
      try {
        const res = await fetch(`/api/${name}`);
        if (!res.ok) {
          throw new Error(`Unable to load ${name}`);
        }
        let records = await res.json();
        if (name === 'routines') {
          records = pruneCompletions(records);
        }
        writeCache(CACHE_KEYS[name], records);
        setOffline(false);
        return records;
      } catch (err) {
        setOffline(true);
        return readCache(CACHE_KEYS[name]);
      }
    };

    const send = async (method, path, body) => {
      if (offline) {
        throw new Error('Offline - changes are disabled');
      }
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || `${method} ${path} failed`);
      }
      return res.status === 204 ? null : res.json();
    };

    const escapeHtml = (value) =>
      String(value)
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;');

    const renderEmpty = (list, message) => {
      list.innerHTML = `<li class="empty">${message}</li>`;
    };

    const refreshStats = (tasks, goals, routines) => {
      const today = todayKey();
      document.getElementById('stat-open-tasks').textContent =
        tasks.filter((task) => !task.completed).length;
      document.getElementById('stat-active-goals').textContent =
        goals.filter((goal) => !goal.completed).length;
      document.getElementById('stat-routines-done').textContent =
        routines.filter((routine) => routine.active && routine.completions[today]).length;
    };

    const renderTasks = (tasks) => {
      const list = document.getElementById('task-list');
      if (!tasks.length) {
        renderEmpty(list, 'No tasks yet. Add your first one above.');
        return;
      }
      list.innerHTML = tasks
        .map((task) => {
          const deadline = task.deadline
            ? `<span class="meta">due ${escapeHtml(task.deadline.slice(0, 10))}</span>`
            : '';
          return `<li class="record" data-id="${task.id}">
            <div class="row">
              <span class="title ${task.completed ? 'done' : ''}">${escapeHtml(task.title)}</span>
              <span class="badge ${task.priority}">${task.priority}</span>
            </div>
            ${task.description ? `<span class="meta">${escapeHtml(task.description)}</span>` : ''}
            <div class="row">
              ${deadline}
              <div class="record-actions">
                <button type="button" data-action="toggle-task">${task.completed ? 'Reopen' : 'Complete'}</button>
                <button type="button" class="danger" data-action="delete-task">Delete</button>
              </div>
            </div>
          </li>`;
        })
        .join('');
    };

    const renderNotes = (notes) => {
      const list = document.getElementById('note-list');
      if (!notes.length) {
        renderEmpty(list, 'No notes yet.');
        return;
      }
      list.innerHTML = notes
        .map((note) => {
          const tags = (note.tags || [])
            .map((tag) => `<span class="badge">${escapeHtml(tag)}</span>`)
            .join(' ');
          return `<li class="record" data-id="${note.id}">
            <div class="row">
              <span class="title">${escapeHtml(note.title)}</span>
              <div class="record-actions">
                <button type="button" class="danger" data-action="delete-note">Delete</button>
              </div>
            </div>
            <span class="meta">${escapeHtml(note.content)}</span>
            ${tags ? `<div class="row">${tags}</div>` : ''}
          </li>`;
        })
        .join('');
    };

    const renderGoals = (goals) => {
      const list = document.getElementById('goal-list');
      if (!goals.length) {
        renderEmpty(list, 'No goals yet.');
        return;
      }
      list.innerHTML = goals
        .map((goal) => {
          const milestones = (goal.milestones || [])
            .map(
              (milestone, index) => `<div class="row">
                <label>
                  <input type="checkbox" data-action="toggle-milestone" data-index="${index}"
                    ${milestone.completed ? 'checked' : ''} />
                  ${escapeHtml(milestone.title)}
                </label>
              </div>`
            )
            .join('');
          return `<li class="record" data-id="${goal.id}">
            <div class="row">
              <span class="title ${goal.completed ? 'done' : ''}">${escapeHtml(goal.title)}</span>
              <span class="badge">${goal.period}</span>
            </div>
            <div class="progress-track"><div class="progress-fill" style="width: ${goal.progress}%"></div></div>
            <span class="meta">${goal.progress}% complete</span>
            ${milestones}
            <div class="row">
              <span class="meta">${goal.target_date ? 'target ' + escapeHtml(goal.target_date.slice(0, 10)) : ''}</span>
              <div class="record-actions">
                <button type="button" class="danger" data-action="delete-goal">Delete</button>
              </div>
            </div>
          </li>`;
        })
        .join('');
    };

    const renderRoutines = (routines) => {
      const list = document.getElementById('routine-list');
      if (!routines.length) {
        renderEmpty(list, 'No routines yet.');
        return;
      }
      const days = [];
      for (let offset = 6; offset >= 0; offset -= 1) {
        const date = new Date();
        date.setDate(date.getDate() - offset);
        days.push(dateKey(date));
      }
      list.innerHTML = routines
        .map((routine) => {
          const window = routine.start_time
            ? `<span class="meta">${escapeHtml(routine.start_time)}${routine.end_time ? ' - ' + escapeHtml(routine.end_time) : ''}</span>`
            : '';
          const dots = days
            .map(
              (day) => `<button type="button" class="week-dot ${routine.completions[day] ? 'done' : ''}"
                data-action="toggle-routine" data-date="${day}" title="${day}"></button>`
            )
            .join('');
          return `<li class="record" data-id="${routine.id}">
            <div class="row">
              <span class="title">${escapeHtml(routine.title)}</span>
              <span class="badge">${routine.category}</span>
            </div>
            <div class="row">
              ${window}
              <div class="week-dots">${dots}</div>
            </div>
            <div class="row">
              <span class="meta" data-role="streak"></span>
              <div class="record-actions">
                <button type="button" class="danger" data-action="delete-routine">Delete</button>
              </div>
            </div>
          </li>`;
        })
        .join('');

      routines.forEach((routine) => {
        fetch(`/api/routines/${routine.id}/history?days=30`)
          .then((res) => (res.ok ? res.json() : null))
          .then((history) => {
            if (!history) return;
            const item = list.querySelector(`li[data-id="${routine.id}"] [data-role="streak"]`);
            if (item) {
              item.textContent = `${history.streak} day streak - ${history.completion_rate}% over 30 days`;
            }
          })
          .catch(() => {});
      });
    };

    const renderReport = (report) => {
      const card = document.getElementById('report-card');
      if (!report) {
        card.innerHTML = '<p class="empty">Reports need a server connection.</p>';
        return;
      }
      const summary = Object.entries(report.summary)
        .map(([key, value]) => {
          const label = key.replace(/_/g, ' ');
          const suffix = key.endsWith('rate') ? '%' : '';
          return `<div class="stat"><span class="label">${label}</span><span class="value">${value}${suffix}</span></div>`;
        })
        .join('');
      const insights = (report.insights || [])
        .map((insight) => `<div class="insight">${escapeHtml(insight)}</div>`)
        .join('');
      card.innerHTML = `
        <h3>${escapeHtml(report.title)}</h3>
        <div class="panel">${summary}</div>
        ${insights || '<p class="empty">No insights for this period yet.</p>'}
      `;
    };

    const loadReport = async () => {
      reportDownload.href = `/api/reports/${activeReport}?format=markdown`;
      try {
        const res = await fetch(`/api/reports/${activeReport}`);
        if (!res.ok) {
          throw new Error('Unable to load report');
        }
        renderReport(await res.json());
      } catch (err) {
        renderReport(null);
      }
    };

    let tasks = [];
    let notes = [];
    let goals = [];
    let routines = [];

    const refresh = async () => {
      [tasks, notes, goals, routines] = await Promise.all([
        fetchCollection('tasks'),
        fetchCollection('notes'),
        fetchCollection('goals'),
        fetchCollection('routines')
      ]);
      renderTasks(tasks);
      renderNotes(notes);
      renderGoals(goals);
      renderRoutines(routines);
      refreshStats(tasks, goals, routines);
      loadReport();
    };

    const submitForm = (form, build, endpoint) => {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        const fields = new FormData(form);
        send('POST', endpoint, build(fields))
          .then(() => {
            form.reset();
            setStatus('Saved', 'ok');
            setTimeout(() => setStatus('', ''), 1200);
            return refresh();
          })
          .catch((err) => setStatus(err.message, 'error'));
      });
    };

    submitForm(document.getElementById('task-form'), (fields) => ({
      title: fields.get('title'),
      description: fields.get('description') || '',
      deadline: fields.get('deadline') || null,
      priority: fields.get('priority')
    }), '/api/tasks');

    submitForm(document.getElementById('note-form'), (fields) => ({
      title: fields.get('title'),
      content: fields.get('content'),
      tags: (fields.get('tags') || '')
        .split(',')
        .map((tag) => tag.trim())
        .filter(Boolean)
    }), '/api/notes');

    submitForm(document.getElementById('goal-form'), (fields) => ({
      title: fields.get('title'),
      description: fields.get('description') || '',
      period: fields.get('period'),
      target_date: fields.get('target_date') || null,
      milestones: (fields.get('milestones') || '')
        .split('\n')
        .map((line) => line.trim())
        .filter(Boolean)
        .map((title) => ({ title, completed: false }))
    }), '/api/goals');

    submitForm(document.getElementById('routine-form'), (fields) => ({
      title: fields.get('title'),
      start_time: fields.get('start_time') || null,
      end_time: fields.get('end_time') || null,
      category: fields.get('category')
    }), '/api/routines');

    document.addEventListener('click', (event) => {
      const button = event.target.closest('[data-action]');
      if (!button) {
        return;
      }
      const record = button.closest('li.record');
      const id = record ? record.dataset.id : null;
      const action = button.dataset.action;
      const run = (promise) =>
        promise.then(refresh).catch((err) => setStatus(err.message, 'error'));

      if (action === 'toggle-task') {
        const task = tasks.find((item) => item.id === id);
        run(send('PUT', `/api/tasks/${id}`, { completed: !task.completed }));
      } else if (action === 'delete-task') {
        run(send('DELETE', `/api/tasks/${id}`));
      } else if (action === 'delete-note') {
        run(send('DELETE', `/api/notes/${id}`));
      } else if (action === 'toggle-milestone') {
        const goal = goals.find((item) => item.id === id);
        const milestones = goal.milestones.map((milestone, index) =>
          index === Number(button.dataset.index)
            ? { ...milestone, completed: !milestone.completed }
            : milestone
        );
        run(send('PUT', `/api/goals/${id}`, { milestones }));
      } else if (action === 'delete-goal') {
        run(send('DELETE', `/api/goals/${id}`));
      } else if (action === 'toggle-routine') {
        run(send('POST', `/api/routines/${id}/toggle/${button.dataset.date}`));
      } else if (action === 'delete-routine') {
        run(send('DELETE', `/api/routines/${id}`));
      }
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((tab) => tab.classList.toggle('active', tab === button));
        document.querySelectorAll('.pane').forEach((pane) => {
          pane.classList.toggle('active', pane.id === `pane-${button.dataset.tab}`);
        });
      });
    });

    reportTabs.forEach((button) => {
      button.addEventListener('click', () => {
        activeReport = button.dataset.report;
        reportTabs.forEach((tab) => tab.classList.toggle('active', tab === button));
        loadReport();
      });
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
